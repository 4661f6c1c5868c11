// src/error.rs
// =============================================================================
// Typed errors for the failures that stop a run.
//
// Per-destination problems (timeouts, refused connections, bad URLs) are NOT
// errors here: the validator records them as outcomes in the error report.
// Only things that make the whole run impossible end up in AuditError.
//
// Rust concepts:
// - thiserror: derive Display and From impls for an error enum
// - #[from]: lets the ? operator convert library errors automatically
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    /// The configured input path is not a readable file
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed (TLS backend setup failed)
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_message_names_path() {
        let err = AuditError::InputNotFound(PathBuf::from("missing/redirects.csv"));
        assert_eq!(err.to_string(), "Input file not found: missing/redirects.csv");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = AuditError::InvalidConfig {
            field: "concurrency".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'concurrency': must be at least 1"
        );
    }
}
