//! Output formatting: turn results into reports.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting results for presentation. It provides:
//!
//! - **CSV**: one row per file plus a total row
//! - **HTML**: one page per directory of the aggregation tree
//! - **SummaryTable**: padded console summary of the totals
//!
//! Everything here builds strings; writing them out is left to the caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use polyloclib::output::{csv_records, render_reports, to_csv};
//! use polyloclib::query::FileTree;
//!
//! let csv = to_csv(&csv_records(&result));
//! let pages = render_reports(&FileTree::from_results(&result.files));
//! ```

pub mod csv;
pub mod html;
pub mod table;

pub use csv::{csv_records, to_csv, write_csv, CSV_HEADER};
pub use html::{escape_html, render_page, render_reports, HtmlReport, SVG_ASSETS};
pub use table::SummaryTable;
