//! Error types and exit codes for kata
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during kata operations
#[derive(Error, Debug)]
pub enum KataError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("matrix error: {0}")]
    Matrix(String),

    #[error("{0}")]
    Other(String),
}

impl KataError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            KataError::UnknownFormat(_) | KataError::UsageError(_) => ExitCode::Usage,
            KataError::Matrix(_) | KataError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            KataError::UnknownFormat(_) => "unknown_format",
            KataError::UsageError(_) => "usage_error",
            KataError::Matrix(_) => "matrix_error",
            KataError::Other(_) => "other",
        }
    }

    /// Render the error as a structured JSON envelope for `--format json`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Convenience result alias used throughout the library
pub type Result<T> = std::result::Result<T, KataError>;
