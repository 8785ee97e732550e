//! Ignore patterns with shell-glob syntax.
//!
//! A pattern such as `*.min.js` or `*/node_modules` is compiled to an
//! anchored regular expression that must match the whole path: `*` matches
//! any run of characters (including `/`) and every other character is
//! literal.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::PolylocError;
use crate::Result;

/// Compiled ignore patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<(String, Regex)>,
}

impl IgnorePatterns {
    /// Create an empty set (nothing is ignored).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one glob pattern.
    pub fn add(mut self, pattern: &str) -> Result<Self> {
        let regex = glob_to_regex(pattern)?;
        tracing::debug!(pattern, regex = %regex.as_str(), "adding ignore pattern");
        self.patterns.push((pattern.to_string(), regex));
        Ok(self)
    }

    /// Add multiple glob patterns.
    pub fn add_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self = self.add(pattern.as_ref())?;
        }
        Ok(self)
    }

    /// The first pattern matching the whole of `path`, if any.
    pub fn matching(&self, path: &Path) -> Option<&str> {
        let path_str = path.to_string_lossy();
        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(&path_str))
            .map(|(pattern, _)| pattern.as_str())
    }

    /// Whether any pattern matches the whole of `path`.
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.matching(path).is_some()
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether there are no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Compile a glob to an anchored, full-match regex.
fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    Regex::new(&format!("^(?:{body})$")).map_err(|e| PolylocError::InvalidIgnorePattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Read an ignore-list document.
///
/// One pattern per line; surrounding whitespace is trimmed and blank lines
/// are dropped.
pub fn read_ignore_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading ignore file");

    let content = fs::read_to_string(path).map_err(|e| PolylocError::IgnoreFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_ignore_list(&content))
}

/// Split an ignore-list document into patterns.
pub fn parse_ignore_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_star_matches_any_prefix() {
        let ignore = IgnorePatterns::new().add("*easy.js").unwrap();

        assert!(ignore.is_ignored(Path::new("test-files/js/easy.js")));
        assert!(ignore.is_ignored(Path::new("easy.js")));
        assert!(!ignore.is_ignored(Path::new("test-files/js/hard.js")));
    }

    #[test]
    fn test_match_is_anchored() {
        let ignore = IgnorePatterns::new().add("src").unwrap();

        assert!(ignore.is_ignored(Path::new("src")));
        assert!(!ignore.is_ignored(Path::new("project/src")));
        assert!(!ignore.is_ignored(Path::new("src/main.js")));
    }

    #[test]
    fn test_dot_is_literal() {
        let ignore = IgnorePatterns::new().add("*.json").unwrap();

        assert!(ignore.is_ignored(Path::new("package.json")));
        assert!(!ignore.is_ignored(Path::new("package_json")));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let ignore = IgnorePatterns::new().add("*/lib(1)+.c").unwrap();

        assert!(ignore.is_ignored(Path::new("vendor/lib(1)+.c")));
        assert!(!ignore.is_ignored(Path::new("vendor/lib11.c")));
    }

    #[test]
    fn test_star_crosses_directories() {
        let ignore = IgnorePatterns::new().add("*node_modules*").unwrap();

        assert!(ignore.is_ignored(Path::new("web/node_modules")));
        assert!(ignore.is_ignored(Path::new("web/node_modules/pkg/index.js")));
    }

    #[test]
    fn test_matching_reports_first_pattern() {
        let ignore = IgnorePatterns::new()
            .add_many(&["*.md", "*README*"])
            .unwrap();

        assert_eq!(ignore.matching(Path::new("README.md")), Some("*.md"));
        assert_eq!(ignore.matching(Path::new("main.js")), None);
        assert_eq!(ignore.len(), 2);
    }

    #[test]
    fn test_empty_patterns_ignore_nothing() {
        let ignore = IgnorePatterns::new();

        assert!(ignore.is_empty());
        assert!(!ignore.is_ignored(Path::new("anything")));
    }

    #[test]
    fn test_parse_ignore_list() {
        let patterns = parse_ignore_list("  *.js  \n\nmisc/\n   \n");

        assert_eq!(patterns, vec!["*.js", "misc/"]);
    }

    #[test]
    fn test_read_ignore_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ignore.txt");
        std::fs::write(&path, "*.js\r\n\r\nmisc/\r\n").unwrap();

        let patterns = read_ignore_file(&path).unwrap();

        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0], "*.js");
        assert_eq!(patterns[1], "misc/");
    }

    #[test]
    fn test_read_ignore_file_missing() {
        let result = read_ignore_file("/nonexistent/ignore.txt");

        assert!(matches!(result, Err(PolylocError::IgnoreFile { .. })));
    }
}
