//! Component discovery: walk an app root, keep component files, describe them.
//!
//! - `walker`: recursive listing with excluded directories
//! - `classify`: extension and file name rules
//! - `extract`: display name, location and styling signals
//! - `props`: props declaration lookup and field parsing

mod classify;
mod extract;
mod props;
mod walker;

use std::fs;
use std::io;
use std::path::Path;

pub use classify::{is_component_file, COMPONENT_EXTENSIONS};
pub use extract::{detect_styling, directory_of, display_name, relative_path, Extractor};
pub use props::{DeclarationKind, DeclarationParser, PropsDeclaration, RegexDeclarationParser};
pub use walker::{walk, EXCLUDED_DIRS};

use crate::models::{AppTag, ComponentInfo};

/// Read a source file as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scans application roots for component files.
#[derive(Debug, Clone, Default)]
pub struct Scanner<P = RegexDeclarationParser> {
    extractor: Extractor<P>,
}

impl<P: DeclarationParser> Scanner<P> {
    pub fn new(parser: P) -> Self {
        Self {
            extractor: Extractor::new(parser),
        }
    }

    pub fn extractor(&self) -> &Extractor<P> {
        &self.extractor
    }

    /// Describe every component file under `root`, in walk order.
    ///
    /// Files that cannot be read are logged and skipped.
    pub fn scan_root(&self, app: AppTag, root: &Path) -> Vec<ComponentInfo> {
        walk(root)
            .into_iter()
            .filter(|path| is_component_file(path))
            .filter_map(|path| self.describe_file(app, root, &path))
            .collect()
    }

    /// Read and describe one file, `None` when it cannot be read.
    pub fn describe_file(&self, app: AppTag, root: &Path, path: &Path) -> Option<ComponentInfo> {
        match read_source(path) {
            Ok(content) => Some(self.extractor.extract(app, root, path, &content)),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Error reading component file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_root_filters_and_describes() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("ui")).unwrap();
        fs::write(root.join("ui/badge.tsx"), "<span style={{ color: 'red' }} />").unwrap();
        fs::write(root.join("ui/badge.stories.tsx"), "export default {};").unwrap();
        fs::write(root.join("ui/badge.ts"), "export {};").unwrap();
        fs::write(root.join("app-shell.jsx"), "export const AppShell = () => null;").unwrap();

        let found = Scanner::<RegexDeclarationParser>::default().scan_root(AppTag::Account, root);
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["AppShell", "Badge"]);
        assert!(found.iter().all(|c| c.app == AppTag::Account));
        assert_eq!(found[1].directory, "/ui");
        assert!(found[1].ui_characteristics.has_inline_styles());
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("good.tsx"), "export {}").unwrap();
        // A directory cannot be read as a file.
        fs::create_dir(root.join("bad.tsx")).unwrap();

        let scanner = Scanner::<RegexDeclarationParser>::default();
        assert!(scanner.describe_file(AppTag::Core, root, &root.join("bad.tsx")).is_none());
        assert!(scanner.describe_file(AppTag::Core, root, &root.join("gone.tsx")).is_none());

        let found = scanner.scan_root(AppTag::Core, root);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Good");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let mut content = b"// \xa9 2024 Acme\n".to_vec();
        content.extend_from_slice(b"export const Footer = () => <footer className=\"flex\" />;\n");
        fs::write(root.join("footer.tsx"), &content).unwrap();

        let found = Scanner::<RegexDeclarationParser>::default().scan_root(AppTag::Core, root);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Footer");
        assert!(found[0].ui_characteristics.has_tailwind());
        assert!(read_source(&root.join("footer.tsx")).unwrap().contains('\u{fffd}'));
    }
}
