//! Core data structures for LOC statistics.
//!
//! Every physical line of a supported file lands in exactly one of three
//! buckets:
//!
//! - **code**: anything that is not a comment or blank
//! - **comments**: single-line comments and every line of a block comment,
//!   including blank lines inside it
//! - **blanks**: whitespace-only lines outside block comments
//!
//! `total` is the number of physical lines, so `code + comments + blanks ==
//! total` always holds.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

use super::classifier::LineKind;

/// Path label of the synthetic row summing every scanned file.
pub const TOTAL_LABEL: &str = "total";

/// Line counts for a file or a group of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locs {
    /// Code lines
    pub code: u64,
    /// Comment lines (single-line and block)
    pub comments: u64,
    /// Blank lines outside block comments
    pub blanks: u64,
    /// Physical line count
    pub total: u64,
}

impl Locs {
    /// Create a new Locs with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classified line.
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Blank => self.blanks += 1,
        }
        self.total += 1;
    }

    /// Whether every line is accounted for exactly once.
    pub fn is_consistent(&self) -> bool {
        self.code + self.comments + self.blanks == self.total
    }
}

impl Add for Locs {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blanks: self.blanks + other.blanks,
            total: self.total + other.total,
        }
    }
}

impl AddAssign for Locs {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.blanks += other.blanks;
        self.total += other.total;
    }
}

impl Sum for Locs {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, locs| acc + locs)
    }
}

/// Scan result for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path to the file, as produced by the walker.
    pub path: PathBuf,
    /// Resolved language name; `None` for unsupported files.
    pub language: Option<String>,
    /// Line counts for this file.
    pub stats: Locs,
}

impl FileStats {
    /// Create new file stats.
    pub fn new(path: PathBuf, language: Option<String>, stats: Locs) -> Self {
        Self {
            path,
            language,
            stats,
        }
    }

    /// All-zero result for a file no language claims.
    pub fn unsupported(path: PathBuf) -> Self {
        Self::new(path, None, Locs::new())
    }

    /// Sum every file into a synthetic result labelled [`TOTAL_LABEL`].
    pub fn total_of<'a>(files: impl IntoIterator<Item = &'a FileStats>) -> Self {
        let stats = files.into_iter().map(|f| f.stats).sum();
        Self::new(PathBuf::from(TOTAL_LABEL), None, stats)
    }

    /// Whether this file was counted (its language was resolved).
    pub fn is_supported(&self) -> bool {
        self.language.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, language: &str, code: u64, comments: u64, blanks: u64) -> FileStats {
        FileStats::new(
            PathBuf::from(path),
            Some(language.to_string()),
            Locs {
                code,
                comments,
                blanks,
                total: code + comments + blanks,
            },
        )
    }

    #[test]
    fn test_locs_default() {
        let locs = Locs::new();
        assert_eq!(locs.code, 0);
        assert_eq!(locs.comments, 0);
        assert_eq!(locs.blanks, 0);
        assert_eq!(locs.total, 0);
        assert!(locs.is_consistent());
    }

    #[test]
    fn test_locs_record() {
        let mut locs = Locs::new();
        locs.record(LineKind::Code);
        locs.record(LineKind::Code);
        locs.record(LineKind::Comment);
        locs.record(LineKind::Blank);

        assert_eq!(locs.code, 2);
        assert_eq!(locs.comments, 1);
        assert_eq!(locs.blanks, 1);
        assert_eq!(locs.total, 4);
        assert!(locs.is_consistent());
    }

    #[test]
    fn test_locs_add() {
        let a = Locs {
            code: 100,
            comments: 10,
            blanks: 15,
            total: 125,
        };
        let b = Locs {
            code: 50,
            comments: 5,
            blanks: 10,
            total: 65,
        };

        let sum = a + b;
        assert_eq!(sum.code, 150);
        assert_eq!(sum.comments, 15);
        assert_eq!(sum.blanks, 25);
        assert_eq!(sum.total, 190);

        let mut acc = a;
        acc += b;
        assert_eq!(acc, sum);
    }

    #[test]
    fn test_total_of() {
        let files = vec![
            file("src/a.js", "JavaScript", 10, 2, 3),
            file("src/b.py", "Python", 5, 1, 0),
            FileStats::unsupported(PathBuf::from("src/c.bin")),
        ];

        let total = FileStats::total_of(&files);

        assert_eq!(total.path, PathBuf::from("total"));
        assert_eq!(total.language, None);
        assert_eq!(total.stats.code, 15);
        assert_eq!(total.stats.comments, 3);
        assert_eq!(total.stats.blanks, 3);
        assert_eq!(total.stats.total, 21);
    }

    #[test]
    fn test_total_of_nothing() {
        let total = FileStats::total_of(&Vec::<FileStats>::new());

        assert_eq!(total.stats, Locs::new());
    }
}
