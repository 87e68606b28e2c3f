//! greeter: a minimal HTTP service.
//!
//! Serves a fixed greeting at `/` and a liveness string at `/health`.
//! Everything else gets axum's default 404/405 responses.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::Error;
pub use routes::create_router;
