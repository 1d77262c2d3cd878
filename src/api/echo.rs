//! Request echo endpoints

use axum::extract::Query;
use axum_extra::extract::CookieJar;

use crate::api::types::{ApiError, CredentialsPayload, Json};
use crate::domain::credential::validate_credentials;
use crate::domain::DomainError;

/// Cookie echoed by `GET /getCookie`
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Query parameter echoed by `GET /getQuery`
pub const USER_ID_PARAM: &str = "userID";

/// GET /getCookie
///
/// Value of the `access_token` cookie, or an empty body.
pub async fn get_cookie(jar: CookieJar) -> String {
    jar.get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .unwrap_or_default()
}

/// GET /getQuery
///
/// First `userID` query value, or an empty body. Pairs are taken as a list so
/// repeated keys never cause a rejection.
pub async fn get_query(Query(params): Query<Vec<(String, String)>>) -> String {
    params
        .into_iter()
        .find(|(key, _)| key == USER_ID_PARAM)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// GET /getJSON
pub async fn get_json(Json(request): Json<CredentialsPayload>) -> Result<String, ApiError> {
    validate_credentials(&request.username, &request.password)
        .map_err(|e| ApiError::from(DomainError::from(e)))?;

    Ok(format!("{}\n{}", request.username, request.password))
}
