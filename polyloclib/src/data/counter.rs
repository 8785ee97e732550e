//! High-level LOC counting API.
//!
//! Ties the walker and the scanner together: discover files under a path,
//! scan each one with the configured registry, and rank the results.

use std::path::Path;

use serde::Serialize;

use crate::language::LanguageRegistry;
use crate::source::{walk, IgnorePatterns};
use crate::Result;

use super::scanner::scan_file;
use super::stats::FileStats;

/// Options for counting LOC.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// Languages used to resolve and classify files
    pub registry: LanguageRegistry,
    /// Paths to leave out of the walk
    pub ignore: IgnorePatterns,
}

impl CountOptions {
    /// Create new default options (built-in languages, nothing ignored).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the language registry.
    pub fn registry(mut self, registry: LanguageRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set ignore patterns.
    pub fn ignore(mut self, ignore: IgnorePatterns) -> Self {
        self.ignore = ignore;
        self
    }
}

/// Result of counting LOC under a path.
#[derive(Debug, Clone, Serialize)]
pub struct CountResult {
    /// Number of files scanned
    pub file_count: usize,
    /// Sum over every file, labelled `total`
    pub total: FileStats,
    /// Per-file results, most code first
    pub files: Vec<FileStats>,
}

impl CountResult {
    /// Rank `files` and compute their total.
    pub fn from_files(mut files: Vec<FileStats>) -> Self {
        sort_by_code(&mut files);
        Self {
            file_count: files.len(),
            total: FileStats::total_of(&files),
            files,
        }
    }
}

/// Count every supported file under `path`.
///
/// # Example
///
/// ```rust
/// use polyloclib::{count_path, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("app.py"), "# entry\nprint('hi')\n").unwrap();
/// fs::write(dir.path().join("notes.txt"), "not counted\n").unwrap();
///
/// let result = count_path(dir.path(), &CountOptions::new()).unwrap();
/// assert_eq!(result.file_count, 1);
/// assert_eq!(result.total.stats.code, 1);
/// assert_eq!(result.total.stats.comments, 1);
/// ```
pub fn count_path(path: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let path = path.as_ref();

    let files = walk(path, &options.ignore, &options.registry)?;
    tracing::info!(path = %path.display(), files = files.len(), "scanning files");

    let results = files
        .iter()
        .map(|file| scan_file(file, &options.registry))
        .collect::<Result<Vec<_>>>()?;

    let result = CountResult::from_files(results);
    tracing::info!(
        files = result.file_count,
        code = result.total.stats.code,
        "scan complete"
    );
    Ok(result)
}

/// Sort by descending code count. Ties keep their walk order.
pub fn sort_by_code(files: &mut [FileStats]) {
    files.sort_by(|a, b| b.stats.code.cmp(&a.stats.code));
}
