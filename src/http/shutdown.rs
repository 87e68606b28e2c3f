//! Graceful shutdown and signal handling.

use std::time::Duration;

use axum_server::Handle;

use crate::config::SHUTDOWN_GRACE_PERIOD_SECS;

#[cfg(unix)]
type Terminate = Option<tokio::signal::unix::Signal>;

#[cfg(not(unix))]
type Terminate = ();

/// Spawn a task that starts graceful shutdown on SIGINT or SIGTERM.
///
/// The SIGTERM handler is registered before this returns, so a signal that
/// arrives once the listener is bound always drains instead of killing the
/// process. In-flight connections get up to the grace period to finish.
pub fn setup_shutdown_handler(handle: Handle) {
    let terminate = register_terminate();

    tokio::spawn(async move {
        let signal = shutdown_signal(terminate).await;
        tracing::info!(signal, "Shutdown signal received");

        handle.graceful_shutdown(Some(Duration::from_secs(SHUTDOWN_GRACE_PERIOD_SECS)));
        tracing::info!(
            grace_period_secs = SHUTDOWN_GRACE_PERIOD_SECS,
            "Draining connections"
        );
    });
}

#[cfg(unix)]
fn register_terminate() -> Terminate {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(sigterm) => Some(sigterm),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install SIGTERM handler");
            None
        }
    }
}

#[cfg(not(unix))]
fn register_terminate() -> Terminate {}

/// Resolves with the name of the first shutdown signal delivered.
///
/// A signal whose handler could not be installed never resolves, so the
/// other one still works.
async fn shutdown_signal(terminate: Terminate) -> &'static str {
    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async move {
        match terminate {
            Some(mut sigterm) => {
                sigterm.recv().await;
                "SIGTERM"
            }
            None => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = {
        let () = terminate;
        std::future::pending::<&'static str>()
    };

    tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    }
}
