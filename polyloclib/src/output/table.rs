//! Console summary table.
//!
//! A pure presentation structure: headers and values already formatted as
//! strings, each column padded to its widest entry. The CLI decides how to
//! style and print the lines.

use serde::Serialize;

use crate::data::Locs;

const COLUMN_GAP: &str = "   ";

/// Summary of a run's totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    /// Column headers
    pub headers: Vec<String>,
    /// One value per header
    pub values: Vec<String>,
}

impl SummaryTable {
    /// Build the Code / Blank lines / Comments / Total summary.
    pub fn from_locs(locs: &Locs) -> Self {
        let columns = [
            ("Code", locs.code),
            ("Blank lines", locs.blanks),
            ("Comments", locs.comments),
            ("Total", locs.code + locs.blanks + locs.comments),
        ];

        Self {
            headers: columns.iter().map(|(name, _)| name.to_string()).collect(),
            values: columns.iter().map(|(_, value)| value.to_string()).collect(),
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .zip(&self.values)
            .map(|(header, value)| header.len().max(value.len()))
            .collect()
    }

    fn pad_row(cells: &[String], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
    }

    /// Padded header row.
    pub fn header_line(&self) -> String {
        Self::pad_row(&self.headers, &self.widths())
    }

    /// Padded value row.
    pub fn value_line(&self) -> String {
        Self::pad_row(&self.values, &self.widths())
    }

    /// Dashed border as wide as the rows.
    pub fn border(&self) -> String {
        "-".repeat(self.value_line().len())
    }

    /// Border, header row, value row, border.
    pub fn lines(&self) -> Vec<String> {
        let border = self.border();
        vec![
            border.clone(),
            self.header_line(),
            self.value_line(),
            border,
        ]
    }
}
