//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Storefront failure taxonomy.
///
/// Every case here is recoverable within the session: the presentation layer
/// decides how each one surfaces (empty state, inline message, transient
/// notice) and no case triggers an automatic retry; the user re-triggers the
/// action instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Empty result; displayed as an empty state, not surfaced as an error.
    #[error("not found")]
    NotFound,

    /// A client-side input check failed before any network call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The external service answered with a failure.
    #[error("server error: {0}")]
    ServerError(String),

    /// No response at all from the external service.
    #[error("service unreachable")]
    Unreachable,

    /// The operation requires a signed-in session.
    #[error("unauthenticated")]
    Unauthenticated,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::ServerError(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
