//! Listener setup and graceful shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::state::AppState;

/// Build the state from `config`, bind, and serve until Ctrl+C.
pub async fn run(config: &ServerConfig) -> Result<()> {
    let service = config
        .build_service()
        .context("failed to open blacklist store")?;
    tracing::info!(
        store = service.store_name(),
        cache_capacity = config.cache_capacity,
        max_index = config.max_index,
        "Service initialized"
    );

    let state = Arc::new(AppState::new(service, config.limits()));
    let router = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting fibsvc-server v{} on {addr}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
