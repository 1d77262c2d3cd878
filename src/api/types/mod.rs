//! Request/response types shared by the handlers

pub mod credentials;
pub mod error;
pub mod json;

pub use credentials::CredentialsPayload;
pub use error::{ApiError, ApiErrorKind};
pub use json::Json;
