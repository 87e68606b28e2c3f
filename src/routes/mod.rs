//! HTTP route handlers.
//!
//! Two static routes. Anything else falls through to axum's defaults: 404 for
//! unknown paths and 405 (with an `Allow` header) for a method other than
//! GET/HEAD on a known path.
//!
//! Request tracing is enabled via middleware that tags each request with a
//! unique id, so every log line emitted while serving it can be correlated.

pub mod health;
pub mod index;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router with both routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(health::health))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
