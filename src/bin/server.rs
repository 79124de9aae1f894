//! Stripboard HTTP Server Binary
//!
//! This is the main entry point for the stripboard REST API server.
//! It initializes the repository, hydrates the scheduling service, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin stripboard-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stripboard::db::{self, SyncSettings};
use stripboard::http::{create_router, AppState};
use stripboard::services::ProductionService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting stripboard HTTP server");

    // Initialize global repository once and reuse it across the app
    db::init_repository().map_err(|e| anyhow::anyhow!(e))?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Sync settings come from repository.toml when present.
    let sync_settings = db::RepositoryConfig::from_default_location()
        .map(|config| config.sync)
        .unwrap_or_else(|_| SyncSettings::default());

    // Hydrate the scheduling service from persisted state
    let service = ProductionService::load(repository, sync_settings)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    info!("Scheduling service hydrated");

    // Create application state
    let state = AppState::new(service);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
