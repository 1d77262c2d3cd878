//! Credential Registry
//!
//! A minimal in-memory username/password registry served over HTTP:
//! - Ordered, lock-guarded credential store with first-match lookups
//! - Signup, index/password lookup, password update and delete endpoints
//! - Cookie, query-parameter and JSON echo endpoints

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::{create_router_with_state, AppState};
pub use config::AppConfig;
