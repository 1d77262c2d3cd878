//! Domain layer - Core business logic and entities

pub mod credential;
pub mod error;

pub use credential::{Credential, CredentialRepository, CredentialValidationError};
pub use error::DomainError;
