//! In-memory credential store

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::credential::{Credential, CredentialRepository, USER_NOT_FOUND};
use crate::domain::DomainError;

/// In-memory implementation of CredentialRepository.
///
/// A single lock guards the whole list; each mutation holds the write guard
/// from the scan through the change, so no caller sees a half-applied step.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialRepository {
    credentials: Arc<RwLock<Vec<Credential>>>,
}

impl InMemoryCredentialRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_credentials(credentials: Vec<Credential>) -> Self {
        Self {
            credentials: Arc::new(RwLock::new(credentials)),
        }
    }
}

fn position_of(credentials: &[Credential], username: &str) -> Result<usize, DomainError> {
    credentials
        .iter()
        .position(|c| c.matches_username(username))
        .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn append(&self, credential: Credential) -> Result<(), DomainError> {
        self.credentials.write().await.push(credential);
        Ok(())
    }

    async fn find_index(&self, username: &str) -> Result<usize, DomainError> {
        let credentials = self.credentials.read().await;
        position_of(&credentials, username)
    }

    async fn find_password(&self, username: &str) -> Result<String, DomainError> {
        let credentials = self.credentials.read().await;
        let index = position_of(&credentials, username)?;
        Ok(credentials[index].password().to_string())
    }

    async fn update_password(&self, username: &str, password: &str) -> Result<(), DomainError> {
        let mut credentials = self.credentials.write().await;
        let index = position_of(&credentials, username)?;
        credentials[index].set_password(password);
        Ok(())
    }

    async fn delete(&self, username: &str, password: &str) -> Result<Credential, DomainError> {
        let mut credentials = self.credentials.write().await;
        let index = credentials
            .iter()
            .position(|c| c.matches(username, password))
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND))?;

        // Vec::remove shifts the tail left, keeping relative order
        Ok(credentials.remove(index))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.credentials.read().await.len())
    }
}
