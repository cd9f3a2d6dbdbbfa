//! CLI-specific error types and mappings.
//!
//! Rule violations from the core keep their kind, and every kind has its own
//! exit code. Kinds with a `sysexits.h` match use it; the assignment and
//! ownership kinds take 80-82, just past the `sysexits.h` range.

use qatrack_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Referenced user, test or card is absent.
    #[error("{0}")]
    NotFound(String),

    /// The caller's role does not allow the operation.
    #[error("{0}")]
    Forbidden(String),

    /// The test is held by someone other than the caller.
    #[error("{0}")]
    NotOwner(String),

    /// The test already has a holder.
    #[error("{0}")]
    AlreadyAssigned(String),

    /// The test is disabled.
    #[error("{0}")]
    Disabled(String),

    /// Duplicate id or another state conflict.
    #[error("{0}")]
    Conflict(String),

    /// The store could not be reached in time.
    #[error("{0}")]
    Unavailable(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Unexpected condition.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    /// - 80-82: Assignment and ownership rules
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 66,        // EX_NOINPUT
            Self::Forbidden(_) => 77,       // EX_NOPERM
            Self::NotOwner(_) => 80,
            Self::AlreadyAssigned(_) => 81,
            Self::Disabled(_) => 82,
            Self::Conflict(_) => 65,        // EX_DATAERR
            Self::Unavailable(_) => 69,     // EX_UNAVAILABLE
            Self::Arguments(_) => 2,        // EX_USAGE
            Self::Io(_) => 74,              // EX_IOERR
            Self::Internal(_) => 70,        // EX_SOFTWARE
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::NotFound(_) => Self::NotFound(message),
            CoreError::Forbidden(_) => Self::Forbidden(message),
            CoreError::NotOwner(_) => Self::NotOwner(message),
            CoreError::AlreadyAssigned(_) => Self::AlreadyAssigned(message),
            CoreError::Disabled(_) => Self::Disabled(message),
            CoreError::Conflict(_) => Self::Conflict(message),
            CoreError::BackendUnavailable(_) => Self::Unavailable(message),
            CoreError::InvalidInput(msg) => Self::Arguments(msg),
            CoreError::Internal(_) => Self::Internal(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
