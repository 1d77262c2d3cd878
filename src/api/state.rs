//! Application state for shared services

use std::sync::Arc;

use crate::domain::{CredentialRepository, DomainError};
use crate::infrastructure::credential::{CredentialService, InMemoryCredentialRepository};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialServiceTrait>,
}

/// Trait for credential service operations
#[async_trait::async_trait]
pub trait CredentialServiceTrait: Send + Sync {
    async fn signup(&self, username: &str, password: &str) -> Result<(), DomainError>;
    async fn index_of(&self, username: &str) -> Result<usize, DomainError>;
    async fn password_of(&self, username: &str) -> Result<String, DomainError>;
    async fn update_password(&self, username: &str, password: &str) -> Result<(), DomainError>;
    async fn delete(&self, username: &str, password: &str) -> Result<(), DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: CredentialRepository + 'static> CredentialServiceTrait for CredentialService<R> {
    async fn signup(&self, username: &str, password: &str) -> Result<(), DomainError> {
        CredentialService::signup(self, username, password).await
    }

    async fn index_of(&self, username: &str) -> Result<usize, DomainError> {
        CredentialService::index_of(self, username).await
    }

    async fn password_of(&self, username: &str) -> Result<String, DomainError> {
        CredentialService::password_of(self, username).await
    }

    async fn update_password(&self, username: &str, password: &str) -> Result<(), DomainError> {
        CredentialService::update_password(self, username, password).await
    }

    async fn delete(&self, username: &str, password: &str) -> Result<(), DomainError> {
        CredentialService::delete(self, username, password).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        CredentialService::count(self).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(credential_service: Arc<dyn CredentialServiceTrait>) -> Self {
        Self { credential_service }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        let repository = Arc::new(InMemoryCredentialRepository::new());
        Self::new(Arc::new(CredentialService::new(repository)))
    }
}
