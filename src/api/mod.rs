//! API layer - HTTP endpoints and middleware

pub mod credentials;
pub mod echo;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use router::{create_registry_router, create_router_with_state};
pub use state::AppState;
