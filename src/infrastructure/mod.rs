//! Infrastructure layer - Store implementations and process plumbing

pub mod credential;
pub mod logging;
