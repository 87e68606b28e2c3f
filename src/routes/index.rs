//! Greeting served at the site root.

use crate::config::INDEX_BODY;

/// Index handler.
pub async fn index() -> &'static str {
    INDEX_BODY
}
