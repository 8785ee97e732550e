//! File scanner: drives the line classifier over a file's lines.
//!
//! Lines end at `\n`. A last line without a terminator still counts, and a
//! trailing terminator does not create an extra empty line. Bytes that are
//! not valid UTF-8 are decoded lossily, so binary files that happen to carry
//! a known extension are counted rather than rejected.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::PolylocError;
use crate::language::{LanguageRegistry, LanguageSpec};
use crate::Result;

use super::classifier::{classify, LineState};
use super::stats::{FileStats, Locs};

/// Scan one file and count its lines.
///
/// The language is resolved from the file's suffix, then its exact name.
/// Unsupported files produce an all-zero result without a language; this
/// is a normal skip, not an error. Failing to open or read a supported file
/// is an error.
///
/// # Example
///
/// ```rust
/// use polyloclib::{scan_file, LanguageRegistry};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let path = dir.path().join("main.js");
/// fs::write(&path, "// greet\nconsole.log('hi');\n").unwrap();
///
/// let result = scan_file(&path, &LanguageRegistry::default()).unwrap();
/// assert_eq!(result.language.as_deref(), Some("JavaScript"));
/// assert_eq!(result.stats.code, 1);
/// assert_eq!(result.stats.comments, 1);
/// ```
pub fn scan_file(path: impl AsRef<Path>, registry: &LanguageRegistry) -> Result<FileStats> {
    let path = path.as_ref();

    let Some((language, spec)) = registry.resolve_path(path) else {
        tracing::debug!(path = %path.display(), "skipping file: type is not supported");
        return Ok(FileStats::unsupported(path.to_path_buf()));
    };

    let file = File::open(path).map_err(|e| PolylocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let stats = scan_reader(file, spec).map_err(|e| PolylocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::trace!(
        path = %path.display(),
        language,
        code = stats.code,
        comments = stats.comments,
        blanks = stats.blanks,
        "scanned file"
    );

    Ok(FileStats::new(
        path.to_path_buf(),
        Some(language.to_string()),
        stats,
    ))
}

/// Count the lines of any reader using the given language's comment syntax.
pub fn scan_reader<R: Read>(reader: R, spec: &LanguageSpec) -> std::io::Result<Locs> {
    let mut reader = BufReader::new(reader);
    let mut stats = Locs::new();
    let mut state = LineState::Code;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let (kind, next) = classify(&line, spec, state);
        stats.record(kind);
        state = next;
    }

    Ok(stats)
}

/// Count the lines of an in-memory source.
///
/// # Example
///
/// ```rust
/// use polyloclib::{scan_str, LanguageSpec};
///
/// let js = LanguageSpec::new(&["//"], &[("/*", "*/")], &[".js"]);
/// let stats = scan_str("// header\n\ncode();\n/* block\ncomment */\nmore();\n", &js);
///
/// assert_eq!(stats.code, 2);
/// assert_eq!(stats.comments, 3);
/// assert_eq!(stats.blanks, 1);
/// assert_eq!(stats.total, 6);
/// ```
pub fn scan_str(source: &str, spec: &LanguageSpec) -> Locs {
    // Reading from a byte slice cannot fail.
    scan_reader(source.as_bytes(), spec).unwrap_or_default()
}
