//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are caller errors surfaced synchronously; nothing here is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A validating record constructor rejected its input (e.g. negative quality).
    #[error("construction failed: {0}")]
    Construction(String),

    /// A record was handed to an engine mode that cannot process its kind.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A value failed validation (e.g. an unknown mode name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
