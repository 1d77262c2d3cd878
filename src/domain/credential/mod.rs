//! Credential domain
//!
//! Domain types for the credential registry: the username/password record,
//! the ordered store contract, and field validation.

mod entity;
pub mod repository;
mod validation;

pub use entity::Credential;
pub use repository::{CredentialRepository, USER_NOT_FOUND};
pub use validation::{
    validate_credentials, validate_password, validate_username, CredentialValidationError,
    BAD_CREDENTIALS,
};

#[cfg(test)]
pub use repository::MockCredentialRepository;
