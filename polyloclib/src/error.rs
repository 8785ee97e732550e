//! Error types for polyloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during LOC counting
#[derive(Error, Debug)]
pub enum PolylocError {
    /// Failed to open or read a source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Scan root does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Directory traversal failed
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failed to read the ignore-list document
    #[error("failed to read ignore file '{path}': {source}")]
    IgnoreFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Ignore pattern did not compile
    #[error("invalid ignore pattern '{pattern}': {message}")]
    InvalidIgnorePattern { pattern: String, message: String },

    /// Language override document is unreadable or malformed
    #[error("invalid language configuration '{path}': {message}")]
    LanguageConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
