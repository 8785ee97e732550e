//! Command-line surface: clap definition and resolved arguments.

use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use polyloclib::{read_ignore_file, LanguageRegistry};

/// Verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!(
                "invalid log level '{s}', use one of DEBUG, INFO, WARN, ERROR"
            )),
        }
    }
}

/// Build the clap Command structure
pub fn build_command() -> Command {
    Command::new("polyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Multi-language lines of code counter with CSV and HTML reports")
        .arg(
            Arg::new("path")
                .help("File or directory to scan")
                .required_unless_present("print-languages"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("INFO")
                .value_parser(LogLevel::from_str)
                .help("Log level: DEBUG, INFO, WARN, ERROR (RUST_LOG takes precedence)"),
        )
        .arg(
            Arg::new("ignore-file-path")
                .long("ignore-file-path")
                .value_name("FILE")
                .help("File of glob patterns, one per line, for paths to exclude from the scan"),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .value_name("FILE")
                .help("Write per-file results to a CSV file instead of standard output"),
        )
        .arg(
            Arg::new("html")
                .long("html")
                .value_name("DIR")
                .help("Write per-directory HTML reports into DIR, which must already exist"),
        )
        .arg(
            Arg::new("override-languages")
                .long("override-languages")
                .value_name("FILE")
                .help("JSON language definitions replacing the built-in table"),
        )
        .arg(
            Arg::new("print-languages")
                .long("print-languages")
                .action(ArgAction::SetTrue)
                .help("Print the active language definitions as JSON and exit"),
        )
}

/// Log level picked on the command line.
pub fn log_level(matches: &ArgMatches) -> LogLevel {
    matches
        .get_one::<LogLevel>("log-level")
        .copied()
        .unwrap_or(LogLevel::Info)
}

/// Language registry: the override document when given, the built-in table otherwise.
pub fn load_registry(matches: &ArgMatches) -> anyhow::Result<LanguageRegistry> {
    match matches.get_one::<String>("override-languages") {
        Some(path) => {
            tracing::debug!(path = %path, "overriding built-in languages");
            LanguageRegistry::from_json_file(path)
                .with_context(|| format!("could not load languages from '{path}'"))
        }
        None => Ok(LanguageRegistry::default()),
    }
}

/// Arguments of a scan run, with every referenced document already loaded.
#[derive(Debug)]
pub struct CliArgs {
    pub path: PathBuf,
    pub ignore_patterns: Vec<String>,
    pub csv_path: Option<PathBuf>,
    pub html_dir: Option<PathBuf>,
    pub registry: LanguageRegistry,
}

impl CliArgs {
    pub fn from_matches(matches: &ArgMatches) -> anyhow::Result<Self> {
        let raw_path = matches
            .get_one::<String>("path")
            .context("a path to the file or directory to scan is required")?;
        let path = clean_path(raw_path);

        let ignore_patterns = match matches.get_one::<String>("ignore-file-path") {
            Some(file) => {
                let patterns = read_ignore_file(file)?;
                tracing::debug!(file = %file, patterns = ?patterns, "read ignore file");
                patterns
            }
            None => Vec::new(),
        };

        let html_dir = matches.get_one::<String>("html").map(PathBuf::from);
        if let Some(dir) = &html_dir {
            if !dir.is_dir() {
                bail!(
                    "HTML report directory '{}' does not exist, please create it first",
                    dir.display()
                );
            }
        }

        let args = Self {
            path,
            ignore_patterns,
            csv_path: matches.get_one::<String>("csv").map(PathBuf::from),
            html_dir,
            registry: load_registry(matches)?,
        };
        tracing::debug!(
            path = %args.path.display(),
            csv = ?args.csv_path,
            html = ?args.html_dir,
            languages = args.registry.len(),
            "parsed arguments"
        );
        Ok(args)
    }
}

/// Normalize a user-supplied path: drop `.` segments and trailing
/// separators, and a stray trailing quote left by some Windows shells.
fn clean_path(raw: &str) -> PathBuf {
    let cleaned: PathBuf = Path::new(raw.trim_end_matches('"'))
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
