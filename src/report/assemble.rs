// src/report/assemble.rs
// =============================================================================
// Combines analysis and validation results into the two output artifacts:
// - cleaned rows: the surviving redirects, exactly as they were written
// - error rows: every checked destination that did not answer 200
//
// Issues travel along for the console and --json output, but are never
// written to either CSV file.
// =============================================================================

use serde::Serialize;

use crate::analysis::{Issue, NormalizedPair, RedirectRecord};
use crate::checker::{StatusOutcome, ValidationResult};

/// A row of the error report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRow {
    pub source: String,
    pub destination: String,
    pub status: StatusOutcome,
}

/// Everything a run produces
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub cleaned_rows: Vec<RedirectRecord>,
    pub error_rows: Vec<ErrorRow>,
    pub issues: Vec<Issue>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.error_rows.is_empty()
    }
}

/// Builds the report. Pass `None` for `validation` when destinations
/// were not checked; the error rows are then empty.
pub fn assemble(
    filtered: &[NormalizedPair],
    issues: &[Issue],
    validation: Option<&[ValidationResult]>,
) -> Report {
    let cleaned_rows = filtered.iter().map(|pair| pair.record.clone()).collect();

    let error_rows = validation
        .unwrap_or_default()
        .iter()
        .filter(|result| !result.is_ok())
        .map(|result| ErrorRow {
            source: result.source_url.clone(),
            destination: result.destination_url.clone(),
            status: result.status,
        })
        .collect();

    Report {
        cleaned_rows,
        error_rows,
        issues: issues.to_vec(),
    }
}
