//! greeter: application entry point.
//!
//! Initializes tracing, loads configuration, builds the router and serves it
//! until a shutdown signal arrives. Any startup failure exits non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use greeter::http::start_server;
use greeter::{create_router, Error};

/// greeter: a minimal greeting service with a liveness endpoint
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Address to listen on (overrides http.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides http.port)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match AppConfig::load_or_default(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet; the logging format lives in this config
            eprintln!("greeter: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Error> {
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
