//! Credential service: input validation in front of the store

use std::sync::Arc;

use tracing::debug;

use crate::domain::credential::{
    validate_credentials, validate_username, Credential, CredentialRepository,
};
use crate::domain::DomainError;

/// Service applying the empty-field policy before any store access
#[derive(Debug)]
pub struct CredentialService<R: CredentialRepository> {
    repository: Arc<R>,
}

impl<R: CredentialRepository> CredentialService<R> {
    /// Create a new credential service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a record at the end of the store. Duplicates are allowed.
    pub async fn signup(&self, username: &str, password: &str) -> Result<(), DomainError> {
        validate_credentials(username, password)?;

        debug!(username = %username, "Appending credential");
        self.repository
            .append(Credential::new(username, password))
            .await
    }

    /// Position of the first record for `username`
    pub async fn index_of(&self, username: &str) -> Result<usize, DomainError> {
        validate_username(username)?;
        self.repository.find_index(username).await
    }

    /// Password of the first record for `username`
    pub async fn password_of(&self, username: &str) -> Result<String, DomainError> {
        validate_username(username)?;
        self.repository.find_password(username).await
    }

    pub async fn update_password(&self, username: &str, password: &str) -> Result<(), DomainError> {
        validate_credentials(username, password)?;

        debug!(username = %username, "Updating password");
        self.repository.update_password(username, password).await
    }

    /// Remove the first record matching both fields
    pub async fn delete(&self, username: &str, password: &str) -> Result<(), DomainError> {
        validate_credentials(username, password)?;

        debug!(username = %username, "Deleting credential");
        self.repository.delete(username, password).await.map(|_| ())
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
