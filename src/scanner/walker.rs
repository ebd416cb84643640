//! Recursive directory walker for application roots.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".next", "dist", "build", "__tests__"];

/// List every regular file under `root`, depth-first, sorted by file name
/// at each level.
///
/// A missing root yields an empty list and a warning. Entries that cannot be
/// read mid-walk are logged and skipped.
pub fn walk(root: &Path) -> Vec<PathBuf> {
    if !root.is_dir() {
        tracing::warn!(path = %root.display(), "Directory not found");
        return Vec::new();
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(DirEntry::into_path)
        .collect()
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}
