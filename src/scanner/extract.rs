//! Metadata extraction from a component file's path and text.

use std::path::{Component, Path};

use once_cell::sync::Lazy;
use regex::Regex;

use super::props::{DeclarationParser, RegexDeclarationParser};
use crate::models::{AppTag, ComponentInfo, UiCharacteristics, ROOT_DIRECTORY};

static TAILWIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)className=["'`][^"'`]*(?:bg-|text-|flex|grid|p-|m-|rounded|border|shadow|hover:|focus:)"#,
    )
    .unwrap()
});

static STYLED_COMPONENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"styled\.\w+|import.*styled.*from.*styled-components").unwrap()
});

static CSS_MODULES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"import.*styles.*from.*\.module\.(?:css|scss|sass)|styles\.\w+").unwrap()
});

static INLINE_STYLES: Lazy<Regex> = Lazy::new(|| Regex::new(r"style=\{\{").unwrap());

/// Display name from a file name: `hero-card.tsx` -> `HeroCard`.
///
/// Splits the stem on `-` and `_` and upper-cases the first letter of each
/// part; the rest of each part is kept as written.
pub fn display_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// `/`-joined path of `path` relative to `root`, or `None` when `path` is
/// not under `root`.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Directory of a relative path with a leading `/`, or [`ROOT_DIRECTORY`].
pub fn directory_of(relative_path: &str) -> String {
    match relative_path.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() => format!("/{}", dir),
        _ => ROOT_DIRECTORY.to_string(),
    }
}

/// Run the four styling detectors over raw file text.
pub fn detect_styling(content: &str) -> UiCharacteristics {
    UiCharacteristics::new(
        TAILWIND.is_match(content),
        STYLED_COMPONENTS.is_match(content),
        CSS_MODULES.is_match(content),
        INLINE_STYLES.is_match(content),
    )
}

/// Builds [`ComponentInfo`] values from file text.
#[derive(Debug, Clone, Default)]
pub struct Extractor<P = RegexDeclarationParser> {
    parser: P,
}

impl<P: DeclarationParser> Extractor<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Describe the file at `path` (under `root`) given its text.
    ///
    /// `has_props` and `props_interface` come from one declaration match, so
    /// a captured interface always implies `has_props`.
    pub fn extract(&self, app: AppTag, root: &Path, path: &Path, content: &str) -> ComponentInfo {
        let relative_path = relative_path(root, path).unwrap_or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        let declaration = self.parser.find_props(content);

        ComponentInfo {
            name: display_name(path),
            path: path.to_string_lossy().into_owned(),
            directory: directory_of(&relative_path),
            relative_path,
            app,
            has_props: declaration.is_some(),
            props_interface: declaration.as_ref().and_then(|d| d.source_text()),
            ui_characteristics: detect_styling(content),
        }
    }
}
