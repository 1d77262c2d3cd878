//! Credential infrastructure module
//!
//! The lock-guarded in-memory store and the service that validates input
//! before reaching it.

mod in_memory;
mod service;

pub use in_memory::InMemoryCredentialRepository;
pub use service::CredentialService;
