//! Table loading utilities
//!
//! This module provides `TableLoader` - a utility for loading source text
//! from files or strings and running scans on it. This is used by both the
//! CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use tbl_scan::tbl::loader::TableLoader;
//! use tbl_scan::tbl::scanner::ScanRules;
//!
//! // From file
//! let loader = TableLoader::from_path("data.tbl").unwrap();
//! let outcome = loader.scan(&ScanRules::default());
//!
//! // From string
//! let loader = TableLoader::from_string("1 2 3\n");
//! assert!(loader.scan(&ScanRules::default()).is_clean());
//! ```

use crate::tbl::scanner::{ScanOutcome, ScanRules, Scanner};
use std::fs;
use std::path::Path;

/// Error that can occur when loading tables
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading file
    IoError(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

/// Table loader with scan shortcuts
///
/// `TableLoader` holds the full source text of one table file. Reading is
/// all-at-once; the scan itself still examines no line past the first bad
/// row.
#[derive(Debug)]
pub struct TableLoader {
    source: String,
}

impl TableLoader {
    /// Load from a file path.
    ///
    /// The file is read as UTF-8 text; no encoding negotiation is performed.
    /// Any failure to open or read it is fatal to the caller's run.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(TableLoader { source })
    }

    /// Load from a string.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        TableLoader {
            source: source.into(),
        }
    }

    /// Scan the loaded source under the given rules.
    pub fn scan(&self, rules: &ScanRules) -> ScanOutcome {
        Scanner::new(rules.clone()).scan(&self.source)
    }

    /// The raw loaded source.
    pub fn source(&self) -> &str {
        &self.source
    }
}
