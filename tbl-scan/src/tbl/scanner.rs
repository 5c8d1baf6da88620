//! The sentinel scan
//!
//! A single sequential pass over the lines of a source. The scan has two
//! states only: scanning, then done. It finishes either by exhausting the
//! input (clean) or at the first data row whose fields contain the sentinel
//! (bad data); it never resumes past a hit.

use crate::tbl::record::{classify, LineClass, LineRecord};
use crate::tbl::token;
use serde::Serialize;

/// Markers the scan looks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    /// Field value flagging an invalid row. Matched by exact equality.
    pub sentinel: String,
    /// Line prefix marking a comment.
    pub comment_prefix: String,
}

impl Default for ScanRules {
    fn default() -> Self {
        ScanRules {
            sentinel: "BAD_DATA".to_string(),
            comment_prefix: "#".to_string(),
        }
    }
}

/// Line counts accumulated over a fully scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScanSummary {
    pub lines: usize,
    pub data_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
}

/// Result of scanning one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Every line was examined and no field matched the sentinel.
    Clean(ScanSummary),
    /// The first line whose fields contain the sentinel. Lines beyond it
    /// were not examined.
    BadData(LineRecord),
}

impl ScanOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, ScanOutcome::Clean(_))
    }
}

/// Scans sources line by line for rows flagged with the sentinel.
#[derive(Debug, Default)]
pub struct Scanner {
    rules: ScanRules,
}

impl Scanner {
    pub fn new(rules: ScanRules) -> Self {
        Scanner { rules }
    }

    pub fn rules(&self) -> &ScanRules {
        &self.rules
    }

    /// Scan a source, stopping at the first bad row.
    ///
    /// Lines are numbered from 1 in file order. `str::lines` strips one
    /// trailing newline per line, so records carry the bare row text.
    pub fn scan(&self, source: &str) -> ScanOutcome {
        let mut summary = ScanSummary::default();

        for (index, text) in source.lines().enumerate() {
            summary.lines += 1;
            match classify(text, &self.rules.comment_prefix) {
                LineClass::Blank => summary.blank_lines += 1,
                LineClass::Comment => summary.comment_lines += 1,
                LineClass::Data => {
                    summary.data_lines += 1;
                    let fields = token::fields(text);
                    if fields.iter().any(|field| *field == self.rules.sentinel) {
                        return ScanOutcome::BadData(LineRecord::new(index + 1, text));
                    }
                }
            }
        }

        ScanOutcome::Clean(summary)
    }
}
