//! Credential registry endpoints
//!
//! Every handler decodes a `{username, password}` body, calls the credential
//! service and answers with a plain-text body. Decode failures, empty fields
//! and missing records all come back as `400 Bad Request`.

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CredentialsPayload, Json};

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<CredentialsPayload>,
) -> Result<StatusCode, ApiError> {
    debug!(username = %request.username, "Signing up user");

    state
        .credential_service
        .signup(&request.username, &request.password)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::CREATED)
}

/// GET /getIndex
pub async fn get_index(
    State(state): State<AppState>,
    Json(request): Json<CredentialsPayload>,
) -> Result<String, ApiError> {
    debug!(username = %request.username, "Looking up user index");

    let index = state
        .credential_service
        .index_of(&request.username)
        .await
        .map_err(ApiError::from)?;

    Ok(index.to_string())
}

/// GET /getpw
pub async fn get_password(
    State(state): State<AppState>,
    Json(request): Json<CredentialsPayload>,
) -> Result<String, ApiError> {
    debug!(username = %request.username, "Looking up user password");

    state
        .credential_service
        .password_of(&request.username)
        .await
        .map_err(ApiError::from)
}

/// PUT /updatepw
pub async fn update_password(
    State(state): State<AppState>,
    Json(request): Json<CredentialsPayload>,
) -> Result<StatusCode, ApiError> {
    debug!(username = %request.username, "Updating user password");

    state
        .credential_service
        .update_password(&request.username, &request.password)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::OK)
}

/// DELETE /deleteuser
pub async fn delete_user(
    State(state): State<AppState>,
    Json(request): Json<CredentialsPayload>,
) -> Result<StatusCode, ApiError> {
    debug!(username = %request.username, "Deleting user");

    state
        .credential_service
        .delete(&request.username, &request.password)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::OK)
}
