//! # polyloclib
//!
//! A multi-language lines of code counter library that separates code,
//! comments, and blank lines.
//!
//! ## Overview
//!
//! Each physical line of a source file is classified by a small state
//! machine driven by the file's language: its single-line comment prefixes
//! and its block comment token pairs. Detection is lexical; nothing is
//! parsed.
//!
//! - **Code**: anything that is not a comment or blank
//! - **Comments**: single-line comments and every line of a block comment
//! - **Blank**: whitespace-only lines outside block comments
//!
//! Per-file counts are then rolled up a directory tree so every directory
//! knows its code lines in total and per language.
//!
//! ## Pipeline
//!
//! 1. [`source`]: walk a directory, honoring ignore patterns
//! 2. [`data`]: classify lines and count them per file
//! 3. [`query`]: aggregate results into a directory tree
//! 4. [`output`]: build CSV, HTML and console reports
//!
//! Languages come from a [`LanguageRegistry`]: the built-in table, or a JSON
//! document that replaces it.
//!
//! ## Example
//!
//! ```rust
//! use polyloclib::{count_path, CountOptions, FileTree, IgnorePatterns};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/app.js"), "// app\nstart();\n\nstop();\n").unwrap();
//! fs::write(dir.path().join("src/app.min.js"), "start();stop();\n").unwrap();
//!
//! let ignore = IgnorePatterns::new().add("*.min.js").unwrap();
//! let result = count_path(dir.path(), &CountOptions::new().ignore(ignore)).unwrap();
//! assert_eq!(result.file_count, 1);
//! assert_eq!(result.total.stats.code, 2);
//! assert_eq!(result.total.stats.comments, 1);
//! assert_eq!(result.total.stats.blanks, 1);
//!
//! let tree = FileTree::from_results(&result.files);
//! assert_eq!(tree.node(tree.root()).code, 2);
//! ```

pub mod data;
pub mod error;
pub mod language;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    classify, count_path, scan_file, scan_reader, scan_str, CountOptions, CountResult, FileStats,
    LineKind, LineState, Locs,
};
pub use error::PolylocError;
pub use language::{LanguageRegistry, LanguageSpec};
pub use output::{HtmlReport, SummaryTable};
pub use query::{FileTree, NodeId, TreeNode};
pub use source::{read_ignore_file, walk, IgnorePatterns};

/// Result type for polyloclib operations
pub type Result<T> = std::result::Result<T, PolylocError>;
