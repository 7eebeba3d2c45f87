//! `quikcart-auth` — session model and client-side credential validation.
//!
//! This crate is intentionally decoupled from HTTP: it validates form input
//! before any call is made and models the session the login response yields.

pub mod credentials;
pub mod session;

pub use credentials::{validate_login, validate_registration, Credentials, RegistrationForm};
pub use session::Session;
