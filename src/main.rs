//! Contact Manager - Main entry point
//!
//! Loads configuration, opens the store once, and serves the contact API.

use anyhow::Result;
use contact_manager::services::{ContactService, ContactServiceImpl};
use contact_manager::{repositories, AppState, Config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Open the store once; every handler shares this pool
    let repository = match repositories::connect(&config).await {
        Ok(repo) => repo,
        Err(e) => {
            error!("Failed to connect to store: {}", e);
            return Err(e.into());
        }
    };

    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    let state = AppState::new(service);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!("Contact manager running on {}", config.socket_addr());

    contact_manager::server::run_server(listener, state).await?;

    info!("Contact manager shutdown complete");
    Ok(())
}
