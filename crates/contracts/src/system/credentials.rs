//! Validation and normalization of login credentials.
//!
//! The employee identifier may carry the organizational prefix `NC`
//! (case-sensitive). Validation runs on every keystroke/blur and again at
//! submit time; all functions here are pure.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::shared::i18n::MessageKey;

/// Organizational prefix of employee identifiers.
pub const EMPLOYEE_ID_PREFIX: &str = "NC";

/// Minimum identifier length (prefix included) when the prefix is present.
pub const MIN_PREFIXED_IDENTIFIER_LEN: usize = 5;
/// Minimum identifier length without the prefix.
pub const MIN_IDENTIFIER_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid identifier pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Employee ID is required")]
    IdentifierRequired,
    #[error("Username must contain only letters and numbers")]
    IdentifierNotAlphanumeric,
    #[error("Username must be at least 3 characters long")]
    IdentifierTooShort,
    #[error("Username must be at least 5 characters long (NC + 3 characters)")]
    PrefixedIdentifierTooShort,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

impl CredentialError {
    pub fn message_key(&self) -> MessageKey {
        match self {
            CredentialError::IdentifierRequired => MessageKey::UsernameRequired,
            CredentialError::IdentifierNotAlphanumeric => MessageKey::UsernameAlphanumeric,
            CredentialError::IdentifierTooShort => MessageKey::UsernameTooShort,
            CredentialError::PrefixedIdentifierTooShort => MessageKey::UsernameTooShortPrefixed,
            CredentialError::PasswordRequired => MessageKey::PasswordRequired,
            CredentialError::PasswordTooShort => MessageKey::PasswordTooShort,
        }
    }
}

/// Validate an employee identifier as typed by the user.
pub fn validate_identifier(value: &str) -> Result<(), CredentialError> {
    if value.is_empty() {
        return Err(CredentialError::IdentifierRequired);
    }

    let (prefixed, rest) = match value.strip_prefix(EMPLOYEE_ID_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    if !ALPHANUMERIC.is_match(rest) {
        return Err(CredentialError::IdentifierNotAlphanumeric);
    }

    let len = value.chars().count();
    if prefixed && len < MIN_PREFIXED_IDENTIFIER_LEN {
        return Err(CredentialError::PrefixedIdentifierTooShort);
    }
    if !prefixed && len < MIN_IDENTIFIER_LEN {
        return Err(CredentialError::IdentifierTooShort);
    }

    Ok(())
}

/// Prepend the organizational prefix unless it is already there.
///
/// Empty input is returned unchanged. Idempotent.
pub fn normalize_identifier(value: &str) -> String {
    if value.is_empty() || value.starts_with(EMPLOYEE_ID_PREFIX) {
        value.to_string()
    } else {
        format!("{}{}", EMPLOYEE_ID_PREFIX, value)
    }
}

pub fn validate_password(value: &str) -> Result<(), CredentialError> {
    if value.is_empty() {
        return Err(CredentialError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    Ok(())
}
