//! Liveness endpoint for external monitors.
//!
//! Returns 200 whenever the process can answer HTTP. It checks nothing else.

use crate::config::HEALTH_BODY;

/// Health check handler.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
