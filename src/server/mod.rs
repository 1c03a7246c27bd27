//! HTTP server for the contact API.
//!
//! This module wires the axum router to a TCP listener and runs it until
//! Ctrl-C is received.

pub mod handlers;
pub mod response;

pub use handlers::{router, AppState};

use anyhow::Result;
use tokio::net::TcpListener;

/// Serve the contact API on `listener` until shutdown.
///
/// # Arguments
/// * `listener` - Bound TCP listener
/// * `state` - Handler state holding the contact service
pub async fn run_server(listener: TcpListener, state: AppState) -> Result<()> {
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
