//! JSON body extractor that reports failures as plain-text 400s

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor.
///
/// Unlike `axum::Json` it does not require a `Content-Type` header: the raw
/// body is decoded as-is. Only the first JSON value is read; anything after
/// it is ignored. An empty body is rejected as `EOF`. Any failure, including
/// one while reading the body, is a 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError::decode(format!(
                "Failed to read request body: {}",
                rejection.body_text()
            ))
        })?;

        decode_first(&body).map(Json)
    }
}

/// Decode the first JSON value in `body`
pub fn decode_first<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<T>();

    match values.next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => Err(ApiError::decode(err.to_string())),
        None => Err(ApiError::decode("EOF")),
    }
}
