//! HTTP server module.
//!
//! Serves the router over plain HTTP and shuts down gracefully on
//! SIGTERM/SIGINT, draining in-flight connections before exiting.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
