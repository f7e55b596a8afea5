//! # Error Types
//!
//! Domain-specific error types for mintage-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mintage-core errors (this file)                                       │
//! │  ├── NormalizeError  - The amount text could not be normalized         │
//! │  └── WorkflowError   - Workflow record could not be processed          │
//! │                                                                         │
//! │  mintage-cli errors (app crate)                                        │
//! │  └── CliError        - I/O, JSON, configuration                        │
//! │                                                                         │
//! │  Flow: NormalizeError → WorkflowError → parseError field / stderr      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is a local, deterministic validation failure. Retrying with
//! the same input always fails the same way.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Normalize Error
// =============================================================================

/// Failures of [`crate::normalizer::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Input is blank after trimming (or was not text at all).
    #[error("Input must be a non-empty string")]
    EmptyInput,

    /// Something other than digits, separators and sign markers was left
    /// over after currency stripping.
    ///
    /// ## When This Occurs
    /// - Unrecognized symbols: `"#100"`
    /// - Words: `"about 100"`, `"hello"`
    /// - A sign marker after the decimal mark: `"500.25-"`
    #[error("Invalid characters in amount: {input:?}")]
    InvalidCharacters { input: String },

    /// The digits do not fit in a signed 64-bit count of minor units.
    #[error("Amount is out of range: {input:?}")]
    OutOfRange { input: String },
}

impl NormalizeError {
    /// Machine-readable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizeError::EmptyInput => ErrorKind::EmptyInput,
            NormalizeError::InvalidCharacters { .. } => ErrorKind::InvalidCharacters,
            NormalizeError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }
}

// =============================================================================
// Workflow Error
// =============================================================================

/// Failures of the workflow-node adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// The record has no usable value at the expected path.
    #[error("{field} field is missing or empty")]
    MissingField { field: String },

    /// The field was present but could not be normalized.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

impl WorkflowError {
    /// Machine-readable kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkflowError::MissingField { .. } => ErrorKind::MissingField,
            WorkflowError::Normalize(e) => e.kind(),
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Error codes for serialized results.
///
/// ## Serialization
/// Rendered exactly as the variant name:
/// ```json
/// { "ok": false, "errorKind": "InvalidCharacters", "message": "..." }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ErrorKind {
    EmptyInput,
    InvalidCharacters,
    OutOfRange,
    MissingField,
}

impl ErrorKind {
    /// Stable name used in logs and CLI output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "EmptyInput",
            ErrorKind::InvalidCharacters => "InvalidCharacters",
            ErrorKind::OutOfRange => "OutOfRange",
            ErrorKind::MissingField => "MissingField",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with NormalizeError.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Convenience type alias for Results with WorkflowError.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

// =============================================================================
// Unit Tests
// =============================================================================
