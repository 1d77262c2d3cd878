//! Credential store trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::Credential;
use crate::domain::DomainError;

/// Message carried by every `NotFound` raised by a credential store
pub const USER_NOT_FOUND: &str = "user doesn't exist";

/// Ordered store of credential records.
///
/// Records keep their insertion order across appends and removals. Usernames
/// are not unique; every lookup resolves to the first match by position.
/// Each call must appear atomic to concurrent callers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Insert a record at the end. No uniqueness check.
    async fn append(&self, credential: Credential) -> Result<(), DomainError>;

    /// Position of the first record whose username equals `username`
    async fn find_index(&self, username: &str) -> Result<usize, DomainError>;

    /// Password of the first record whose username equals `username`
    async fn find_password(&self, username: &str) -> Result<String, DomainError>;

    /// Overwrite the password of the first record matching `username`
    async fn update_password(&self, username: &str, password: &str) -> Result<(), DomainError>;

    /// Remove the first record matching both fields, returning it
    async fn delete(&self, username: &str, password: &str) -> Result<Credential, DomainError>;

    /// Number of records
    async fn count(&self) -> Result<usize, DomainError>;
}
