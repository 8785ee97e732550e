//! Output sinks: CSV file or stdout, HTML directory, console summary.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use console::Style;
use polyloclib::output::{render_reports, write_csv, SVG_ASSETS};
use polyloclib::{FileTree, SummaryTable};

/// Write CSV records to `path`, replacing any existing file.
pub fn write_csv_file(path: &Path, records: &[Vec<String>]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create CSV file '{}'", path.display()))?;
    write_csv(BufWriter::new(file), records)
        .with_context(|| format!("could not write CSV file '{}'", path.display()))
}

/// Print CSV records to stdout.
pub fn print_csv(records: &[Vec<String>]) -> anyhow::Result<()> {
    write_csv(io::stdout().lock(), records).context("could not write CSV to stdout")
}

/// Write one page per directory of `tree` into `dir`, plus the SVG icons.
///
/// Returns the number of pages written.
pub fn write_html_reports(dir: &Path, tree: &FileTree) -> anyhow::Result<usize> {
    let reports = render_reports(tree);
    for report in &reports {
        let path = dir.join(&report.file_name);
        tracing::debug!(path = %path.display(), "writing HTML report");
        fs::write(&path, &report.content)
            .with_context(|| format!("could not write HTML report '{}'", path.display()))?;
    }

    for (name, svg) in SVG_ASSETS {
        let path = dir.join(name);
        fs::write(&path, svg)
            .with_context(|| format!("could not write icon '{}'", path.display()))?;
    }

    Ok(reports.len())
}

/// Print the totals table to stdout.
pub fn print_summary(table: &SummaryTable) -> io::Result<()> {
    let border = Style::new().dim();
    let header = Style::new().bold();

    let mut out = io::stdout().lock();
    writeln!(out, "{}", border.apply_to(table.border()))?;
    writeln!(out, "{}", header.apply_to(table.header_line()))?;
    writeln!(out, "{}", table.value_line())?;
    writeln!(out, "{}", border.apply_to(table.border()))?;
    Ok(())
}
