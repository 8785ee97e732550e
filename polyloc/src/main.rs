//! # polyloc
//!
//! A CLI tool for counting lines of code across many languages.
//!
//! ## Overview
//!
//! polyloc is built on top of polyloclib. It walks a file or directory,
//! classifies every line of each supported file as code, comment or blank,
//! and reports the results per file, per directory and per language.
//!
//! ## Usage
//!
//! ```bash
//! # Count a directory, CSV rows on stdout
//! polyloc src
//!
//! # Skip paths listed in an ignore file, write the CSV to disk
//! polyloc . --ignore-file-path .polylocignore --csv loc.csv
//!
//! # Browseable per-directory reports (the directory must exist)
//! mkdir reports && polyloc . --html reports
//!
//! # Custom languages
//! polyloc --print-languages > languages.json
//! polyloc . --override-languages languages.json
//! ```
//!
//! The last line on stdout is always the total number of code lines, so
//! scripts can read it with `tail -n 1`.

mod args;
mod logging;
mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::ArgMatches;
use polyloclib::output::csv_records;
use polyloclib::{count_path, CountOptions, FileTree, IgnorePatterns, SummaryTable};

use crate::args::CliArgs;

fn main() -> ExitCode {
    let matches = args::build_command().get_matches();
    logging::initialize(args::log_level(&matches));

    match run(&matches) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run the CLI. `Ok(false)` means the scan finished but an output sink failed.
fn run(matches: &ArgMatches) -> anyhow::Result<bool> {
    if matches.get_flag("print-languages") {
        let registry = args::load_registry(matches)?;
        println!("{}", registry.to_json_pretty());
        return Ok(true);
    }

    let CliArgs {
        path,
        ignore_patterns,
        csv_path,
        html_dir,
        registry,
    } = CliArgs::from_matches(matches)?;

    let ignore = IgnorePatterns::new().add_many(&ignore_patterns)?;
    let options = CountOptions::new().registry(registry).ignore(ignore);

    tracing::info!(path = %path.display(), "scanning");
    let result = count_path(&path, &options)
        .with_context(|| format!("could not scan '{}'", path.display()))?;
    tracing::info!(code = result.total.stats.code, "total lines of code");

    let mut sinks_ok = true;
    let records = csv_records(&result);

    match &csv_path {
        Some(csv_path) => match render::write_csv_file(csv_path, &records) {
            Ok(()) => tracing::info!(path = %csv_path.display(), "results written"),
            Err(e) => {
                tracing::error!("{e:#}");
                sinks_ok = false;
            }
        },
        None => {
            if let Err(e) = render::print_csv(&records) {
                tracing::error!("{e:#}");
                sinks_ok = false;
            }
        }
    }

    if let Some(dir) = &html_dir {
        let tree = FileTree::from_results(&result.files);
        match render::write_html_reports(dir, &tree) {
            Ok(pages) => tracing::info!(dir = %dir.display(), pages, "HTML reports written"),
            Err(e) => {
                tracing::error!("{e:#}");
                sinks_ok = false;
            }
        }
    }

    render::print_summary(&SummaryTable::from_locs(&result.total.stats))
        .context("could not print summary")?;

    // Last line of stdout: the total alone, for scripts.
    println!("{}", result.total.stats.code);

    Ok(sinks_ok)
}
