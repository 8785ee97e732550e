//! Tabular report: one CSV row per file plus a trailing total row.

use std::io::{self, Write};

use crate::data::{CountResult, FileStats, TOTAL_LABEL};

/// Column names of the tabular report.
pub const CSV_HEADER: [&str; 5] = ["filePath", "languageName", "blank", "comment", "code"];

/// Build the report records: header, one row per file in the given order,
/// and the `total` row.
pub fn csv_records(result: &CountResult) -> Vec<Vec<String>> {
    let mut records = Vec::with_capacity(result.files.len() + 2);
    records.push(CSV_HEADER.iter().map(|s| s.to_string()).collect());
    records.extend(result.files.iter().map(file_record));

    let total = &result.total.stats;
    records.push(vec![
        TOTAL_LABEL.to_string(),
        String::new(),
        total.blanks.to_string(),
        total.comments.to_string(),
        total.code.to_string(),
    ]);
    records
}

fn file_record(file: &FileStats) -> Vec<String> {
    vec![
        file.path.display().to_string(),
        file.language.clone().unwrap_or_default(),
        file.stats.blanks.to_string(),
        file.stats.comments.to_string(),
        file.stats.code.to_string(),
    ]
}

/// Write records as CSV, one line each.
pub fn write_csv<W: Write>(mut writer: W, records: &[Vec<String>]) -> io::Result<()> {
    for record in records {
        let line = record
            .iter()
            .map(|field| quote_field(field))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Render records to a CSV string.
pub fn to_csv(records: &[Vec<String>]) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_csv(&mut out, records);
    String::from_utf8_lossy(&out).into_owned()
}

/// Quote a field when it holds a delimiter, a quote or a line break.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
