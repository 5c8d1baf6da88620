//! Report rendering for scan outcomes
//!
//! Renders a `ScanOutcome` either for people (the classic one-line messages)
//! or for machines (a JSON report). Format names are registered in
//! [`FORMATS`] so callers can list them.

use crate::tbl::scanner::{ScanOutcome, ScanSummary};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Output format for scan reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Name and description of one report format.
pub struct FormatInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Registry of the formats the renderer knows about.
pub static FORMATS: Lazy<Vec<FormatInfo>> = Lazy::new(|| {
    vec![
        FormatInfo {
            name: "text",
            description: "Human-readable messages (default)",
        },
        FormatInfo {
            name: "json",
            description: "Pretty-printed JSON report",
        },
    ]
});

/// Error for a format name not present in [`FORMATS`].
#[derive(Debug, Clone)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = FORMATS
            .iter()
            .map(|info| info.name)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "unknown report format '{}' (known formats: {})", self.0, known)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Serializable projection of a scan outcome.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Report {
    Clean {
        #[serde(flatten)]
        summary: ScanSummary,
    },
    BadData {
        line_number: usize,
        line: String,
    },
}

impl From<&ScanOutcome> for Report {
    fn from(outcome: &ScanOutcome) -> Self {
        match outcome {
            ScanOutcome::Clean(summary) => Report::Clean { summary: *summary },
            ScanOutcome::BadData(record) => Report::BadData {
                line_number: record.number,
                line: record.text.clone(),
            },
        }
    }
}

/// Render an outcome as the classic one-line messages.
pub fn render_text(outcome: &ScanOutcome) -> String {
    match outcome {
        ScanOutcome::Clean(_) => "No errors detected in file.".to_string(),
        ScanOutcome::BadData(record) => {
            format!("bad data detected at line {}:\n   {}", record.number, record.text)
        }
    }
}

/// Render an outcome as a pretty-printed JSON report.
pub fn render_json(outcome: &ScanOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Report::from(outcome))
}
