mod classifier;
mod config;
mod determinism;
mod enhancer;
mod errors;
mod mcp;
mod models;
mod routes;
mod validation;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, Transport};
use crate::routes::build_router;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Structured logging on stderr; stdout belongs to the stdio transport.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting prompt enhancer v{}", env!("CARGO_PKG_VERSION"));

    match config.transport {
        Transport::Stdio => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            mcp::server::serve(stdin, tokio::io::stdout(), shutdown_signal()).await?;
        }
        Transport::Http => {
            let app = build_router()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive());

            let addr: SocketAddr = format!("{}:{}", config.host, config.port)
                .parse()
                .context("HOST/PORT do not form a valid socket address")?;
            info!("Listening on {addr}");

            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    info!("Stopped");
    Ok(())
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
