use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use super::credentials;
use super::echo;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;

/// Credential and echo routes, relative to the API prefix
pub fn create_registry_router() -> Router<AppState> {
    Router::new()
        // Request echo
        .route("/getCookie", get(echo::get_cookie))
        .route("/getQuery", get(echo::get_query))
        .route("/getJSON", get(echo::get_json))
        // Credential store
        .route("/signup", post(credentials::signup))
        .route("/getIndex", get(credentials::get_index))
        .route("/getpw", get(credentials::get_password))
        .route("/updatepw", put(credentials::update_password))
        .route("/deleteuser", delete(credentials::delete_user))
}

/// Create the full router with application state.
///
/// Health endpoints live at the root; the registry routes are nested under
/// `prefix`, or merged at the root when the prefix is empty or `/`.
/// Request bodies are not size-limited.
pub fn create_router_with_state(state: AppState, prefix: &str) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check));

    let router = match normalize_prefix(prefix) {
        Some(prefix) => router.nest(&prefix, create_registry_router()),
        None => router.merge(create_registry_router()),
    };

    router
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

/// `"api/"` -> `Some("/api")`, `""` and `"/"` -> `None`
fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_matches('/');

    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}
