//! Language registry: which files are counted and how their comments look.
//!
//! Every supported language is described by a [`LanguageSpec`]: its
//! single-line comment prefixes, block comment token pairs, file extensions
//! and exact file names. A [`LanguageRegistry`] holds the specs in lookup
//! order and is passed explicitly to the walker and the scanner.
//!
//! ## Example
//!
//! ```rust
//! use polyloclib::LanguageRegistry;
//!
//! let registry = LanguageRegistry::default();
//! let (name, _spec) = registry.resolve_extension(".rb").unwrap();
//! assert_eq!(name, "Ruby");
//! ```

mod defaults;
pub mod registry;

pub use registry::{file_suffix, LanguageRegistry, LanguageSpec};
