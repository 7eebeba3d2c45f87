//! `quikcart-client` — JSON-over-HTTP collaborator for the storefront backend.
//!
//! Thin request/response plumbing: endpoint config, bearer-token auth on the
//! cart routes, and the mapping from HTTP statuses to the storefront failure
//! taxonomy. No retries; the user re-triggers the action.

pub mod api;
pub mod config;
pub mod error;

pub use api::StorefrontClient;
pub use config::{Config, ENDPOINT_ENV};
pub use error::ApiError;
