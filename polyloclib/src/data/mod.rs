//! Data collection: scan files and collect statistics.
//!
//! This module handles the second stage of the pipeline - classifying the
//! lines of each source file and collecting LOC statistics. It provides:
//!
//! - **Classification**: the per-line state machine (`classify`)
//! - **Scanning**: drive the classifier over a file (`scan_file`)
//! - **Statistics**: core data structures (`Locs`, `FileStats`)
//! - **Counting**: high-level API (`count_path`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyloclib::data::{count_path, CountOptions};
//!
//! let result = count_path(".", &CountOptions::new())?;
//! println!("Total code lines: {}", result.total.stats.code);
//! ```

pub mod classifier;
pub mod counter;
pub mod scanner;
pub mod stats;

pub use classifier::{classify, LineKind, LineState};
pub use counter::{count_path, sort_by_code, CountOptions, CountResult};
pub use scanner::{scan_file, scan_reader, scan_str};
pub use stats::{FileStats, Locs, TOTAL_LABEL};
