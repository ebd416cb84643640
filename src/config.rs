//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/catalogue/config.toml` (XDG) or platform config dir
//! 2. Project config: `.catalogue.toml`
//! 3. Explicit file passed with `--config`
//! 4. Environment variables: `CATALOGUE_*`
//!
//! # Intended Usage
//!
//! ```toml
//! [apps]
//! core = "/work/crescender-core/components"
//! account = "/work/crescender-core/tmp/crescender-account/components"
//! geargrabber = "/work/crescender-core/tmp/geargrabber/components"
//! clavet = "/work/clavet/components"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! ```
//!
//! Any app may be left out; it is then scanned as a missing directory.
//! Environment overrides use `_` as the separator, e.g. `CATALOGUE_APPS_CORE`.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::models::AppTag;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub apps: AppRoots,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Root directory per application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppRoots {
    pub core: Option<PathBuf>,
    pub account: Option<PathBuf>,
    pub geargrabber: Option<PathBuf>,
    pub clavet: Option<PathBuf>,
}

impl AppRoots {
    /// Configured root for an app, if any.
    pub fn root(&self, app: AppTag) -> Option<&Path> {
        match app {
            AppTag::Core => self.core.as_deref(),
            AppTag::Account => self.account.as_deref(),
            AppTag::GearGrabber => self.geargrabber.as_deref(),
            AppTag::Clavet => self.clavet.as_deref(),
        }
    }

    /// Set the root for an app.
    pub fn set(&mut self, app: AppTag, root: impl Into<PathBuf>) {
        let slot = match app {
            AppTag::Core => &mut self.core,
            AppTag::Account => &mut self.account,
            AppTag::GearGrabber => &mut self.geargrabber,
            AppTag::Clavet => &mut self.clavet,
        };
        *slot = Some(root.into());
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load config with layered resolution (user → project → explicit file → env).
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(Self::user_config_path()))
            // Layer 2: Project config
            .merge(Toml::file(".catalogue.toml"));

        // Layer 3: File named on the command line
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        Self::from_figment(figment.merge(Env::prefixed("CATALOGUE_").split("_")))
    }

    /// Extract a config from an already assembled figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(ConfigError::from)
    }

    /// User config path: ~/.config/catalogue/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("catalogue").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("catalogue").join("config.toml"))
            .unwrap_or_default()
    }
}
