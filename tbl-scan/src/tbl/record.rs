//! Line records and classification
//!
//! Core classification logic for deciding how a line participates in a scan.
//! Blank and comment lines are skipped; data lines are field-split and
//! checked against the sentinel.

use crate::tbl::token;
use serde::Serialize;

/// One scanned line: 1-based line number plus newline-stripped text.
///
/// Records are transient; nothing outlives the scan except the single record
/// carried out by a bad-data outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    pub number: usize,
    pub text: String,
}

impl LineRecord {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        LineRecord {
            number,
            text: text.into(),
        }
    }

    /// The whitespace-separated fields of this line.
    pub fn fields(&self) -> Vec<String> {
        token::fields(&self.text)
    }
}

/// How a line participates in a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Zero characters after newline stripping.
    Blank,
    /// First character matches the comment prefix; excluded from validation.
    Comment,
    /// A data row of whitespace-separated fields.
    Data,
}

/// Determine the class of a newline-stripped line.
///
/// The blank check comes first: an empty line has no leading character to
/// compare against the comment prefix, and is neither a comment nor a data
/// row.
pub fn classify(text: &str, comment_prefix: &str) -> LineClass {
    if text.is_empty() {
        return LineClass::Blank;
    }
    if text.starts_with(comment_prefix) {
        return LineClass::Comment;
    }
    LineClass::Data
}
