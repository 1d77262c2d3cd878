//! Credential validation utilities

use thiserror::Error;

use crate::domain::DomainError;

/// Message returned to callers for any empty required field
pub const BAD_CREDENTIALS: &str = "bad credentials";

/// Errors that can occur during credential validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl From<CredentialValidationError> for DomainError {
    fn from(_: CredentialValidationError) -> Self {
        DomainError::invalid_input(BAD_CREDENTIALS)
    }
}

/// Validate a username. Only emptiness is checked.
pub fn validate_username(username: &str) -> Result<(), CredentialValidationError> {
    if username.is_empty() {
        return Err(CredentialValidationError::EmptyUsername);
    }

    Ok(())
}

/// Validate a password. Only emptiness is checked.
pub fn validate_password(password: &str) -> Result<(), CredentialValidationError> {
    if password.is_empty() {
        return Err(CredentialValidationError::EmptyPassword);
    }

    Ok(())
}

/// Validate both fields, username first
pub fn validate_credentials(username: &str, password: &str) -> Result<(), CredentialValidationError> {
    validate_username(username)?;
    validate_password(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username(" ").is_ok());
        assert_eq!(
            validate_username(""),
            Err(CredentialValidationError::EmptyUsername)
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("x").is_ok());
        assert_eq!(
            validate_password(""),
            Err(CredentialValidationError::EmptyPassword)
        );
    }

    #[test]
    fn test_validate_credentials_checks_username_first() {
        assert_eq!(
            validate_credentials("", ""),
            Err(CredentialValidationError::EmptyUsername)
        );
        assert_eq!(
            validate_credentials("alice", ""),
            Err(CredentialValidationError::EmptyPassword)
        );
        assert!(validate_credentials("alice", "pw").is_ok());
    }

    #[test]
    fn test_validation_error_maps_to_invalid_input() {
        let error: DomainError = CredentialValidationError::EmptyPassword.into();
        assert_eq!(error, DomainError::invalid_input(BAD_CREDENTIALS));
    }
}
