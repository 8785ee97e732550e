//! Directory traversal producing the list of files to scan.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::PolylocError;
use crate::language::LanguageRegistry;
use crate::Result;

use super::filter::IgnorePatterns;

/// Walk `root` depth-first and return the files worth scanning.
///
/// Entries are visited in file-name order. Every entry path (as joined onto
/// `root`) is tested against the ignore patterns: an ignored directory is
/// not descended into, an ignored file is dropped. Files the registry cannot
/// resolve to a language are dropped too. A `root` that is a file is handled
/// the same way and yields at most itself.
///
/// The process working directory is never changed.
pub fn walk(
    root: impl AsRef<Path>,
    ignore: &IgnorePatterns,
    registry: &LanguageRegistry,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(PolylocError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| match ignore.matching(entry.path()) {
            Some(pattern) => {
                tracing::debug!(
                    path = %entry.path().display(),
                    pattern,
                    is_dir = entry.file_type().is_dir(),
                    "ignoring path"
                );
                false
            }
            None => true,
        });

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if registry.resolve_path(path).is_some() {
            files.push(path.to_path_buf());
        } else {
            tracing::debug!(path = %path.display(), "skipping file: type is not supported");
        }
    }

    tracing::debug!(root = %root.display(), files = files.len(), "walk finished");
    Ok(files)
}
