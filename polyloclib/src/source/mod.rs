//! Source discovery: find files to analyze.
//!
//! This module handles the first stage of the pipeline - discovering what
//! files to count. It provides:
//!
//! - **Ignore patterns**: shell-glob rules compiled to anchored regexes
//! - **Walking**: depth-first traversal keeping files a language claims
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyloclib::source::{read_ignore_file, walk, IgnorePatterns};
//! use polyloclib::LanguageRegistry;
//!
//! let patterns = read_ignore_file(".polylocignore")?;
//! let ignore = IgnorePatterns::new().add_many(&patterns)?;
//! let files = walk("src", &ignore, &LanguageRegistry::default())?;
//! ```

pub mod filter;
pub mod walker;

pub use filter::{parse_ignore_list, read_ignore_file, IgnorePatterns};
pub use walker::walk;
