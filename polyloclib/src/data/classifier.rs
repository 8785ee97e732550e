//! Line classifier: decides whether one physical line is code, comment or blank.
//!
//! Detection is purely lexical. The only state carried from one line to the
//! next is whether an unterminated block comment is open, and which of the
//! language's block comment pairs opened it.
//!
//! For a line, after trimming surrounding whitespace:
//!
//! 1. If a block comment is open, or the line starts with an open token,
//!    the line belongs to a block comment:
//!    - if the whole line ends with the close token the line is a comment
//!      and the block is closed;
//!    - if the close token does not appear after the open token the line is
//!      a comment and the block stays open;
//!    - otherwise the text after the first close token is classified again
//!      as a fresh line, so `*/ foo();` counts as code.
//! 2. An empty line is blank.
//! 3. A line starting with a single-line comment prefix is a comment.
//! 4. Anything else is code.
//!
//! A whitespace-only line inside an open block comment is a comment.

use serde::Serialize;

use crate::language::LanguageSpec;

/// Classification of a single physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    Code,
    Comment,
    Blank,
}

/// Block comment state carried across the lines of one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineState {
    /// Not inside a block comment
    #[default]
    Code,
    /// Inside an unterminated block comment opened by the pair at this index
    /// of [`LanguageSpec::multi_line_comments`]
    InBlock(usize),
}

impl LineState {
    /// Whether an unterminated block comment is open.
    pub fn in_block_comment(&self) -> bool {
        matches!(self, LineState::InBlock(_))
    }
}

/// Classify `line` given the state left by the previous line.
///
/// Returns the line's kind and the state for the next line.
///
/// # Example
///
/// ```rust
/// use polyloclib::{classify, LanguageSpec, LineKind, LineState};
///
/// let js = LanguageSpec::new(&["//"], &[("/*", "*/")], &[".js"]);
///
/// let (kind, state) = classify("/* opens", &js, LineState::Code);
/// assert_eq!(kind, LineKind::Comment);
/// assert!(state.in_block_comment());
///
/// let (kind, state) = classify("closes */ run();", &js, state);
/// assert_eq!(kind, LineKind::Code);
/// assert_eq!(state, LineState::Code);
/// ```
pub fn classify(line: &str, spec: &LanguageSpec, state: LineState) -> (LineKind, LineState) {
    let mut rest = line.trim();
    let mut state = state;

    // Each pass consumes one block comment; code after a mid-line close
    // token goes around again as a fresh line.
    loop {
        // `skip` is the length of the open token, so a close token is only
        // searched for after it.
        let (pair, skip) = match state {
            LineState::InBlock(pair) => (pair, 0),
            LineState::Code => match spec.block_opening(rest) {
                Some(pair) => (pair, spec.multi_line_comments[pair].0.len()),
                None => break,
            },
        };

        let Some((_, close)) = spec.multi_line_comments.get(pair) else {
            // The pair index came from a different spec; nothing can close it.
            return (LineKind::Comment, state);
        };
        let close = close.as_str();

        // The whole line is tested, so `/*/` and a lone `"""` close themselves.
        if rest.ends_with(close) {
            return (LineKind::Comment, LineState::Code);
        }
        let body = &rest[skip..];
        match body.find(close) {
            None => return (LineKind::Comment, LineState::InBlock(pair)),
            Some(at) => {
                rest = body[at + close.len()..].trim();
                state = LineState::Code;
            }
        }
    }

    if rest.is_empty() {
        (LineKind::Blank, LineState::Code)
    } else if spec.starts_line_comment(rest) {
        (LineKind::Comment, LineState::Code)
    } else {
        (LineKind::Code, LineState::Code)
    }
}
