//! CLI-specific error types and mappings.
//!
//! Maps core, pipeline and client errors to exit codes and user-facing
//! messages.

use closet_core::{ClassificationError, CoreError, PathError, PipelineError, RepositoryError};
use closet_vision::VisionError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (bad entry name, bad destination).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The named entry does not exist.
    #[error("No closet entry named '{0}'. Use 'closet list' to see entries.")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error (missing API key, unusable directory).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Closet storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A remote service could not be reached or failed.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The classifier answered outside its contract.
    #[error("{0}")]
    Protocol(String),

    /// Another capture is in flight.
    #[error("{0}")]
    Busy(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success (including a rejected capture)
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66,           // EX_NOINPUT
            Self::ServiceUnavailable(_) => 69, // EX_UNAVAILABLE
            Self::Storage(_) => 73,            // EX_CANTCREAT
            Self::Io(_) => 74,                 // EX_IOERR
            Self::Busy(_) => 75,               // EX_TEMPFAIL
            Self::Protocol(_) => 76,           // EX_PROTOCOL
            Self::Config(_) => 78,             // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(name)) => Self::NotFound(name),
            CoreError::Repository(RepositoryError::InvalidName(name)) => {
                Self::Arguments(format!("'{name}' is not a valid entry name"))
            }
            CoreError::Repository(repo_err) => Self::Storage(repo_err.to_string()),
        }
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        let message = format!("{} ({err})", err.user_message());
        match err {
            PipelineError::Busy => Self::Busy(message),
            PipelineError::CaptureFailed(_) => Self::Io(message),
            PipelineError::Classification(ClassificationError::ContractViolation { .. }) => {
                Self::Protocol(message)
            }
            PipelineError::Classification(ClassificationError::Service(_))
            | PipelineError::Extraction(_) => Self::ServiceUnavailable(message),
            PipelineError::Persistence(_) => Self::Storage(message),
        }
    }
}

impl From<VisionError> for CliError {
    fn from(err: VisionError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
