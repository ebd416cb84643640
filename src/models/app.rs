//! AppTag enum identifying which application a component belongs to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of front-end applications whose components are catalogued.
///
/// Variant order is the scan order and the order used for per-app counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppTag {
    Core,
    Account,
    #[serde(rename = "geargrabber")]
    GearGrabber,
    Clavet,
}

impl AppTag {
    /// Returns a static slice of all application tags in scan order.
    pub fn all() -> &'static [AppTag] {
        &[
            AppTag::Core,
            AppTag::Account,
            AppTag::GearGrabber,
            AppTag::Clavet,
        ]
    }

    /// The tag as it appears in URLs, JSON and configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppTag::Core => "core",
            AppTag::Account => "account",
            AppTag::GearGrabber => "geargrabber",
            AppTag::Clavet => "clavet",
        }
    }

    /// Human-readable label for filter controls.
    pub fn label(&self) -> &'static str {
        match self {
            AppTag::Core => "Core",
            AppTag::Account => "Account",
            AppTag::GearGrabber => "GearGrabber",
            AppTag::Clavet => "Clavet",
        }
    }
}

impl std::fmt::Display for AppTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(AppTag::Core),
            "account" => Ok(AppTag::Account),
            "geargrabber" => Ok(AppTag::GearGrabber),
            "clavet" => Ok(AppTag::Clavet),
            _ => Err(format!(
                "Invalid app '{}'. Valid values: core, account, geargrabber, clavet",
                s
            )),
        }
    }
}
