//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! Amount parsing failures are NOT errors at this level: commands report
//! them as output (a line of text or a `parseError` field) and carry on.
//! `CliError` is for the things that stop a command outright.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading stdin / a file or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Workflow input was not valid JSON, or output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Workflow input was JSON but not an object (or array of objects).
    #[error("Invalid workflow record: {0}")]
    InvalidRecord(String),

    /// `parse` was given amounts and at least one failed.
    #[error("{failed} of {total} amounts failed to parse")]
    ParseFailures { failed: usize, total: usize },
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::InvalidRecord("expected an object, got a number".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid workflow record: expected an object, got a number"
        );

        let err = CliError::ParseFailures { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 amounts failed to parse");
    }

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::InvalidValue("MINTAGE_PRETTY_JSON".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_boxes_for_main() {
        let boxed: Box<dyn std::error::Error> = CliError::ParseFailures { failed: 1, total: 3 }.into();
        assert_eq!(boxed.to_string(), "1 of 3 amounts failed to parse");
    }
}
