//! Error types for configuration editing.

use crate::validator::ValidationError;

/// Result alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Failure of a configuration operation.
///
/// Every variant is recoverable: the committed configuration is never
/// modified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A candidate broke an invariant
    #[error("validation failed: {0}")]
    ValidationFailed(ValidationError),
    /// Serialized text is not well-formed
    #[error("parse failed: {0}")]
    ParseFailed(String),
    /// The persistence backend reported a failure
    #[error("persistence failed: {0}")]
    PersistenceFailed(String),
    /// A structured edit was attempted while the text view is authoritative
    #[error("structured view is frozen while editing text; apply or discard the text first")]
    ViewFrozen,
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationFailed(err)
    }
}

impl ConfigError {
    /// Returns the validation detail for `ValidationFailed`.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::ValidationFailed(err) => Some(err),
            _ => None,
        }
    }
}
