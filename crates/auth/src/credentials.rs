//! Client-side form validation for registration and login.
//!
//! Validation runs before any network call; a failure surfaces inline and no
//! call is made. Checks run in order and the first failure wins, so the user
//! sees one message at a time.

use serde::Serialize;

use quikcart_core::{DomainError, DomainResult};

/// Minimum length for both username and password.
pub const MIN_FIELD_LEN: usize = 6;

/// Validated credentials, ready to send to the auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Raw values from the registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate the registration form.
pub fn validate_registration(form: &RegistrationForm) -> DomainResult<Credentials> {
    if form.username.is_empty() {
        return Err(DomainError::validation("Username is a required field"));
    }
    if form.username.len() < MIN_FIELD_LEN {
        return Err(DomainError::validation(
            "Username must be at least 6 characters",
        ));
    }
    if form.password.is_empty() {
        return Err(DomainError::validation("Password is a required field"));
    }
    if form.password.len() < MIN_FIELD_LEN {
        return Err(DomainError::validation(
            "Password must be at least 6 characters",
        ));
    }
    if form.password != form.confirm_password {
        return Err(DomainError::validation("Passwords do not match"));
    }

    Ok(Credentials {
        username: form.username.clone(),
        password: form.password.clone(),
    })
}

/// Validate the login form. Only presence is checked; length rules apply at
/// registration time.
pub fn validate_login(username: &str, password: &str) -> DomainResult<Credentials> {
    if username.is_empty() {
        return Err(DomainError::validation("Username is a required field"));
    }
    if password.is_empty() {
        return Err(DomainError::validation("Password is a required field"));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn message(result: DomainResult<Credentials>) -> String {
        match result.unwrap_err() {
            DomainError::Validation(msg) => msg,
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn empty_username_is_required_field() {
        let result = validate_registration(&form("", "password1", "password1"));
        assert_eq!(message(result), "Username is a required field");
    }

    #[test]
    fn short_username_is_rejected() {
        let result = validate_registration(&form("abc", "password1", "password1"));
        assert_eq!(message(result), "Username must be at least 6 characters");
    }

    #[test]
    fn empty_password_is_required_field() {
        let result = validate_registration(&form("crio.do", "", ""));
        assert_eq!(message(result), "Password is a required field");
    }

    #[test]
    fn short_password_is_rejected() {
        let result = validate_registration(&form("crio.do", "abc", "abc"));
        assert_eq!(message(result), "Password must be at least 6 characters");
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let result = validate_registration(&form("crio.do", "password1", "password2"));
        assert_eq!(message(result), "Passwords do not match");
    }

    #[test]
    fn first_failure_wins() {
        // Several fields are wrong; the username check fires first.
        let result = validate_registration(&form("", "abc", "xyz"));
        assert_eq!(message(result), "Username is a required field");
    }

    #[test]
    fn valid_form_yields_credentials() {
        let credentials =
            validate_registration(&form("crio.do", "password1", "password1")).unwrap();
        assert_eq!(credentials.username, "crio.do");
        assert_eq!(credentials.password, "password1");
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            message(validate_login("", "password1")),
            "Username is a required field"
        );
        assert_eq!(
            message(validate_login("crio.do", "")),
            "Password is a required field"
        );
    }

    #[test]
    fn login_does_not_enforce_length() {
        // Existing accounts may predate the length rule; login only checks
        // presence.
        assert!(validate_login("abc", "xyz").is_ok());
    }
}
