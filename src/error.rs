//! Error types for prompt-designer.
//!
//! Rendering itself is total and never fails; these errors only come from
//! the settings boundary and the command-line harness.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for prompt-designer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignerError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Settings text is not parseable JSON or not a JSON object.
    #[error("Invalid settings document: {0}")]
    DeserializationError(String),

    /// A file could not be read or written.
    #[error("I/O failure: {0}")]
    IoError(String),
}

impl DesignerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DesignerError::UserError(_) => exit_codes::USER_ERROR,
            DesignerError::DeserializationError(_) => exit_codes::DESERIALIZATION_FAILURE,
            DesignerError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for prompt-designer operations.
pub type Result<T> = std::result::Result<T, DesignerError>;
