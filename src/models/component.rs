//! ComponentInfo and styling characteristics for a discovered component file.

use serde::Serialize;

use super::AppTag;

/// Directory value used for components that sit directly in an app root.
pub const ROOT_DIRECTORY: &str = "/";

/// Metadata for one discovered component file.
///
/// Built once per scan and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Display name derived from the file name (e.g. `hero-card.tsx` -> `HeroCard`).
    pub name: String,
    /// Absolute path of the file.
    pub path: String,
    /// Path relative to the app root, always `/`-separated.
    pub relative_path: String,
    /// Application the file was found under.
    pub app: AppTag,
    /// Parent directory relative to the app root with a leading `/`,
    /// or [`ROOT_DIRECTORY`].
    pub directory: String,
    /// Whether a `*Props` interface or type alias was found.
    pub has_props: bool,
    /// Raw text of the first props declaration, when its body could be captured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props_interface: Option<String>,
    /// Styling signals detected in the file text.
    pub ui_characteristics: UiCharacteristics,
}

/// Styling techniques detected in a component file.
///
/// `is_ui_component` is derived from the four signals and cannot be set directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiCharacteristics {
    has_tailwind: bool,
    has_styled_components: bool,
    has_css_modules: bool,
    has_inline_styles: bool,
    is_ui_component: bool,
}

impl UiCharacteristics {
    pub fn new(
        has_tailwind: bool,
        has_styled_components: bool,
        has_css_modules: bool,
        has_inline_styles: bool,
    ) -> Self {
        Self {
            has_tailwind,
            has_styled_components,
            has_css_modules,
            has_inline_styles,
            is_ui_component: has_tailwind
                || has_styled_components
                || has_css_modules
                || has_inline_styles,
        }
    }

    /// Utility classes (`bg-`, `flex`, `hover:` ...) inside a `className` literal.
    pub fn has_tailwind(&self) -> bool {
        self.has_tailwind
    }

    /// `styled.x` calls or a styled-components import.
    pub fn has_styled_components(&self) -> bool {
        self.has_styled_components
    }

    /// A `*.module.css|scss|sass` import or `styles.x` member access.
    pub fn has_css_modules(&self) -> bool {
        self.has_css_modules
    }

    /// A `style={{ ... }}` attribute.
    pub fn has_inline_styles(&self) -> bool {
        self.has_inline_styles
    }

    /// True iff any of the four styling signals is set.
    pub fn is_ui_component(&self) -> bool {
        self.is_ui_component
    }
}
