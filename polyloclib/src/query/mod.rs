//! Query processing: aggregate and rank data.
//!
//! This module handles the third stage of the pipeline - rolling flat
//! per-file results up into a directory tree. It provides:
//!
//! - **FileTree**: arena of directory and file nodes with summed counts
//! - **Ranking**: children and languages ordered by code lines
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyloclib::query::FileTree;
//!
//! let tree = FileTree::from_results(&result.files);
//! println!("{} code lines", tree.node(tree.root()).code);
//! ```

pub mod tree;

pub use tree::{FileTree, NodeId, TreeNode, ROOT_NAME};
