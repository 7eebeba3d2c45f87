//! HTTP-facing error model.

use thiserror::Error;

use quikcart_core::DomainError;

/// Failure of one call to the storefront backend.
///
/// Statuses follow the backend convention: failures carry a
/// `{success: false, message}` body, and 400/401/404/500 distinguish bad
/// request, missing auth, empty result and server fault. Getting no response
/// at all is its own case so the caller can surface a distinct notice.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 400, message taken from the response body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// HTTP 401: bearer token missing or no longer valid.
    #[error("unauthenticated")]
    Unauthenticated,

    /// HTTP 404: empty-result condition, not a fault.
    #[error("not found")]
    NotFound,

    /// HTTP 500 (or any other failure status), message from the body.
    #[error("server error: {0}")]
    ServerError(String),

    /// No usable response: connect failure, timeout, or undecodable body.
    #[error("backend unreachable")]
    Unreachable(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unreachable(err)
    }
}

impl ApiError {
    /// Fold into the domain taxonomy the presentation layer branches on.
    pub fn to_domain(&self) -> DomainError {
        match self {
            ApiError::BadRequest(msg) => DomainError::Validation(msg.clone()),
            ApiError::Unauthenticated => DomainError::Unauthenticated,
            ApiError::NotFound => DomainError::NotFound,
            ApiError::ServerError(msg) => DomainError::ServerError(msg.clone()),
            ApiError::Unreachable(_) => DomainError::Unreachable,
        }
    }
}
