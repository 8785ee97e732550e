//! Language specs and the ordered registry used to resolve files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::PolylocError;
use crate::Result;

/// Comment syntax and file matchers for one language.
///
/// The serialized field names match the override document format:
///
/// ```json
/// {
///   "LineComments": ["//"],
///   "MultiLineComments": [["/*", "*/"]],
///   "Extensions": [".js"],
///   "FileNames": []
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LanguageSpec {
    /// Prefixes that start a comment running to the end of the line
    pub line_comments: Vec<String>,
    /// Open/close token pairs for block comments
    pub multi_line_comments: Vec<(String, String)>,
    /// Lowercase extensions with a leading dot (e.g. ".js")
    pub extensions: Vec<String>,
    /// Exact file names for files without a useful extension (e.g. "Dockerfile")
    #[serde(default)]
    pub file_names: Vec<String>,
}

impl LanguageSpec {
    /// Create a spec from comment tokens and extensions.
    pub fn new(
        line_comments: &[&str],
        multi_line_comments: &[(&str, &str)],
        extensions: &[&str],
    ) -> Self {
        Self {
            line_comments: line_comments.iter().map(|s| s.to_string()).collect(),
            multi_line_comments: multi_line_comments
                .iter()
                .map(|(open, close)| (open.to_string(), close.to_string()))
                .collect(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            file_names: Vec::new(),
        }
    }

    /// Add exact file names matched by this language.
    pub fn with_file_names(mut self, names: &[&str]) -> Self {
        self.file_names = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Whether `line` starts with one of the single-line comment prefixes.
    pub fn starts_line_comment(&self, line: &str) -> bool {
        self.line_comments
            .iter()
            .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()))
    }

    /// Index of the first block comment pair whose open token starts `line`.
    pub fn block_opening(&self, line: &str) -> Option<usize> {
        self.multi_line_comments.iter().position(|(open, close)| {
            !open.is_empty() && !close.is_empty() && line.starts_with(open.as_str())
        })
    }

    /// Whether `ext` is one of this language's extensions (exact comparison).
    pub fn has_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    /// Whether `name` is one of this language's exact file names.
    pub fn has_file_name(&self, name: &str) -> bool {
        self.file_names.iter().any(|n| n == name)
    }
}

/// Ordered mapping from language name to [`LanguageSpec`].
///
/// Lookups scan the languages in order and return the first match, so a
/// well-formed registry never assigns one extension to two languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageRegistry {
    languages: IndexMap<String, LanguageSpec>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            languages: IndexMap::new(),
        }
    }

    /// Add a language at the end of the lookup order, replacing any
    /// language registered under the same name.
    pub fn register(&mut self, name: impl Into<String>, spec: LanguageSpec) {
        self.languages.insert(name.into(), spec);
    }

    /// Parse an override document. The result replaces the built-in table
    /// entirely; nothing is merged.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, Path::new("<inline>"))
    }

    /// Read and parse an override document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PolylocError::LanguageConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    fn parse(json: &str, origin: &Path) -> Result<Self> {
        let registry: Self =
            serde_json::from_str(json).map_err(|e| PolylocError::LanguageConfig {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;

        if registry.is_empty() {
            tracing::warn!(path = %origin.display(), "language configuration defines no languages");
        }
        registry.warn_on_overlaps();

        tracing::debug!(
            path = %origin.display(),
            languages = registry.len(),
            "loaded language configuration"
        );
        Ok(registry)
    }

    /// Log every extension or file name claimed by more than one language.
    fn warn_on_overlaps(&self) {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for (name, spec) in &self.languages {
            for key in spec.extensions.iter().chain(spec.file_names.iter()) {
                if let Some(first) = owners.insert(key.as_str(), name.as_str()) {
                    if first != name.as_str() {
                        tracing::warn!(
                            matcher = %key,
                            first = %first,
                            shadowed = %name,
                            "matcher registered for more than one language; first match wins"
                        );
                    }
                }
            }
        }
    }

    /// Serialize the registry in the override document format.
    pub fn to_json_pretty(&self) -> String {
        // A map of strings and string lists always serializes.
        serde_json::to_string_pretty(&self.languages).unwrap_or_default()
    }

    /// Find the language owning `ext` (e.g. ".js").
    pub fn resolve_extension(&self, ext: &str) -> Option<(&str, &LanguageSpec)> {
        self.languages
            .iter()
            .find(|(_, spec)| spec.has_extension(ext))
            .map(|(name, spec)| (name.as_str(), spec))
    }

    /// Find the language owning the exact file name `name` (e.g. "Dockerfile").
    pub fn resolve_file_name(&self, name: &str) -> Option<(&str, &LanguageSpec)> {
        self.languages
            .iter()
            .find(|(_, spec)| spec.has_file_name(name))
            .map(|(name, spec)| (name.as_str(), spec))
    }

    /// Resolve a path by its lowercase suffix, falling back to its exact file name.
    pub fn resolve_path(&self, path: &Path) -> Option<(&str, &LanguageSpec)> {
        let file_name = path.file_name()?.to_string_lossy();
        file_suffix(&file_name)
            .and_then(|suffix| self.resolve_extension(&suffix))
            .or_else(|| self.resolve_file_name(&file_name))
    }

    /// Look up a language by name.
    pub fn get(&self, name: &str) -> Option<&LanguageSpec> {
        self.languages.get(name)
    }

    /// Iterate languages in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageSpec)> {
        self.languages.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Number of registered languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no languages are registered.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl Default for LanguageRegistry {
    /// The built-in language table.
    fn default() -> Self {
        let mut registry = Self::empty();
        for (name, spec) in super::defaults::builtin_languages() {
            registry.register(name, spec);
        }
        registry
    }
}

/// Lowercase suffix of a file name including the leading dot.
///
/// Everything after the last `.` counts, so `archive.tar.GZ` gives `.gz`
/// and `.bashrc` gives `.bashrc`. Names without a dot have no suffix.
pub fn file_suffix(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}
