//! Error types for ios-doctor operations.
//!
//! This module defines [`DoctorError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failed diagnosis is not an error; it is a `CheckResult` with `ok: false`
//! - [`DoctorError::FixSkipped`] means the user declined a fix and must stay
//!   distinguishable from every other failure
//! - Collaborator failures during a fix propagate unmodified
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ios-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// The user declined an offered fix.
    #[error("Fix skipped by user")]
    FixSkipped,

    /// External command exited unsuccessfully or could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A prompt was needed but no answer could be obtained.
    #[error("Cannot prompt for '{key}' in non-interactive mode (no default value)")]
    PromptUnavailable { key: String },

    /// An explicitly requested settings file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DoctorError {
    /// Whether this error is the "user declined" signal.
    pub fn is_fix_skipped(&self) -> bool {
        matches!(self, DoctorError::FixSkipped)
    }
}

/// Result type alias for ios-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
