//! Error types for the GOOGLIA engine.
//!
//! One enum per concern:
//!
//! - [`IntakeError`] - File selection errors
//! - [`PipelineError`] - Record state machine errors
//! - [`ExportError`] - Simulated export errors
//! - [`AuthError`] - Login form validation errors
//! - [`ConfigError`] - Configuration loading errors
//!
//! Every simulated operation succeeds once its input is valid, so these
//! variants only ever describe bad input or misuse of the state machine.

use thiserror::Error;

use crate::models::{RecordId, RecordStatus};

// =============================================================================
// Intake Errors
// =============================================================================

/// Errors raised while handing the pending selection to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The user asked to process an empty selection.
    #[error("No file selected")]
    EmptySelection,
}

// =============================================================================
// Pipeline Errors
// =============================================================================

/// Errors from the processing state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A batch without files was submitted.
    #[error("Cannot submit an empty batch")]
    EmptyBatch,

    /// No record carries this id.
    #[error("Unknown record: {0}")]
    UnknownRecord(RecordId),

    /// The record already left the pending state.
    #[error("Record {id} is already {status}")]
    AlreadySettled { id: RecordId, status: RecordStatus },
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors from the simulated export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// None of the given records has completed.
    #[error("No completed record to export")]
    NothingToExport,
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Login form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email field left blank.
    #[error("Email is required")]
    MissingEmail,

    /// Email does not look like an address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Password field left blank.
    #[error("Password is required")]
    MissingPassword,
}

// =============================================================================
// Config Errors
// =============================================================================

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    /// The processing delay range is inverted.
    #[error("min delay ({min_ms} ms) is greater than max delay ({max_ms} ms)")]
    InvertedDelayRange { min_ms: u128, max_ms: u128 },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_settled_format() {
        let err = PipelineError::AlreadySettled {
            id: RecordId::from("abc123"),
            status: RecordStatus::Completed,
        };
        let msg = err.to_string();
        assert!(msg.contains("abc123"));
        assert!(msg.contains("completed"));
    }

    #[test]
    fn test_inverted_range_format() {
        let err = ConfigError::InvertedDelayRange { min_ms: 5000, max_ms: 2000 };
        assert!(err.to_string().contains("5000 ms"));
    }
}
