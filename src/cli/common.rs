//! Shared CLI error handling and exit codes.

use std::fmt;

use crate::error::ConfigError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input failed parsing or validation
    ValidationError = 1,
    /// File system or persistence failure
    IoError = 2,
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad user input
    Validation,
    /// I/O or persistence failure
    Io,
}

/// A failed command with its message.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Message shown on stderr
    pub message: String,
}

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::PersistenceFailed(_) => Self::io(err.to_string()),
            ConfigError::ValidationFailed(_) | ConfigError::ParseFailed(_) | ConfigError::ViewFrozen => {
                Self::validation(err.to_string())
            }
        }
    }
}

/// Parses a comma-separated list of row numbers (`"11,12"`).
pub fn parse_row_list(value: &str) -> CliResult<Vec<u32>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| CliError::validation(format!("Invalid row number '{part}'")))
        })
        .collect()
}
