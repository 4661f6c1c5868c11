// src/config.rs
// =============================================================================
// Run configuration, validated once from the parsed command line.
//
// The rest of the program only ever sees an AuditConfig, so every value in it
// has already been range-checked.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use crate::checker::ValidatorOptions;
use crate::cli::Cli;
use crate::error::AuditError;

pub const CLEANED_FILE_NAME: &str = "cleaned.csv";
pub const ERRORS_FILE_NAME: &str = "redirect-errors.csv";

#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub validate_destinations: bool,
    pub validator: ValidatorOptions,
    pub json: bool,
}

impl AuditConfig {
    pub fn cleaned_path(&self) -> PathBuf {
        self.output_dir.join(CLEANED_FILE_NAME)
    }

    pub fn errors_path(&self) -> PathBuf {
        self.output_dir.join(ERRORS_FILE_NAME)
    }
}

impl TryFrom<Cli> for AuditConfig {
    type Error = AuditError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.concurrency == 0 {
            return Err(invalid("concurrency", "must be at least 1"));
        }
        if cli.timeout_ms == 0 {
            return Err(invalid("timeout-ms", "must be at least 1"));
        }

        Ok(Self {
            input_path: cli.input,
            output_dir: cli.output_dir,
            validate_destinations: cli.validate,
            validator: ValidatorOptions {
                concurrency: cli.concurrency,
                timeout: Duration::from_millis(cli.timeout_ms),
                request_delay: Duration::from_millis(cli.delay_ms),
            },
            json: cli.json,
        })
    }
}

fn invalid(field: &str, reason: &str) -> AuditError {
    AuditError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<AuditConfig, AuditError> {
        let mut argv = vec!["redirect-audit"];
        argv.extend_from_slice(args);
        AuditConfig::try_from(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_defaults_map_to_validator_options() {
        let config = parse(&["in.csv"]).unwrap();
        assert_eq!(config.validator, ValidatorOptions::default());
        assert!(!config.validate_destinations);
        assert_eq!(config.cleaned_path(), PathBuf::from("output").join("cleaned.csv"));
        assert_eq!(
            config.errors_path(),
            PathBuf::from("output").join("redirect-errors.csv")
        );
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let err = parse(&["in.csv", "--concurrency", "0"]).unwrap_err();
        assert!(matches!(err, AuditError::InvalidConfig { ref field, .. } if field == "concurrency"));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = parse(&["in.csv", "--timeout-ms", "0"]).unwrap_err();
        assert!(matches!(err, AuditError::InvalidConfig { ref field, .. } if field == "timeout-ms"));
    }

    #[test]
    fn test_custom_values() {
        let config = parse(&["in.csv", "--validate", "--concurrency", "2", "--delay-ms", "250"]).unwrap();
        assert!(config.validate_destinations);
        assert_eq!(config.validator.concurrency, 2);
        assert_eq!(config.validator.request_delay, Duration::from_millis(250));
    }
}
