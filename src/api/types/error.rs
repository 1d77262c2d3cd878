//! Plain-text API errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use tracing::debug;

use crate::domain::DomainError;

/// Which part of request handling failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Body is not a decodable credentials object
    Decode,
    /// A required field is empty
    InvalidInput,
    /// No record matches
    NotFound,
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode => write!(f, "decode_error"),
            Self::InvalidInput => write!(f, "invalid_input"),
            Self::NotFound => write!(f, "not_found"),
        }
    }
}

/// API error with status code, rendered as a `text/plain` body.
///
/// The body is the message followed by a single newline.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    /// Malformed request body
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorKind::Decode, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, error = %self, "Request rejected");
        (self.status, format!("{}\n", self.message)).into_response()
    }
}

// Every domain failure is reported to the caller as 400.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let kind = match &err {
            DomainError::NotFound { .. } => ApiErrorKind::NotFound,
            DomainError::InvalidInput { .. } => ApiErrorKind::InvalidInput,
        };

        Self::new(StatusCode::BAD_REQUEST, kind, err.message())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
