//! Decides whether a file path looks like a component source file.

use std::path::Path;

/// Extensions of component source files.
pub const COMPONENT_EXTENSIONS: &[&str] = &["tsx", "jsx"];

/// File name markers of tests and stories.
const EXCLUDED_MARKERS: &[&str] = &[".test.", ".spec.", ".stories."];

/// Pure check on the path; the file is never opened.
pub fn is_component_file(path: &Path) -> bool {
    let has_component_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPONENT_EXTENSIONS.contains(&ext));
    if !has_component_ext {
        return false;
    }

    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };

    !file_name.starts_with('.') && !EXCLUDED_MARKERS.iter().any(|m| file_name.contains(m))
}
