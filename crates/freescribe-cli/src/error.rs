//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps
//! `PathError` to exit codes and user-facing messages.

use freescribe_paths::PathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument error (empty file name, missing segments).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// A required directory could not be determined.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The application data directory could not be created.
    #[error("Cannot create directory: {0}")]
    CantCreate(String),

    /// IO error (working directory gone, stdout closed).
    #[error("IO error: {0}")]
    Io(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 64: invalid arguments (`EX_USAGE`)
    /// - 70: internal software error (`EX_SOFTWARE`)
    /// - 73: cannot create output (`EX_CANTCREAT`)
    /// - 74: input/output error (`EX_IOERR`)
    /// - 78: configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 64,
            Self::Serialization(_) => 70,
            Self::CantCreate(_) => 73,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Exit code for an error chain, `1` when no `CliError` is in it.
    pub fn exit_code_for(err: &anyhow::Error) -> u8 {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<Self>())
            .map_or(1, Self::exit_code)
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::EmptyPath => Self::Arguments(err.to_string()),
            PathError::NoHomeDir | PathError::NoDataDir => Self::Config(err.to_string()),
            PathError::NotADirectory(_) | PathError::CreateFailed { .. } => {
                Self::CantCreate(err.to_string())
            }
            PathError::CurrentDirError(_) => Self::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
