//! OpenSearch-Facade: HTTP facade over an OpenSearch index
//!
//! This is the main entry point for the application.

use anyhow::Result;
use opensearch_facade::{
    config,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting OpenSearch-Facade v{}", opensearch_facade::VERSION);

    // Load configuration
    let settings = config::load()?;
    info!(
        "Using OpenSearch at {} (index: {})",
        settings.opensearch.base_url()?,
        settings.opensearch.index_name
    );

    // Create application state
    let state = AppState::new(&settings)?;

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
