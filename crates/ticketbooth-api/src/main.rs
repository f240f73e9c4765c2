//! Ticketbooth API server entry point.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use ticketbooth_api::config::ServerConfig;
use ticketbooth_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Ticketbooth API server");

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let app = ticketbooth_api::app(AppState::production(config.cache_capacity));

    tracing::info!(
        cache_capacity = config.cache_capacity.get(),
        "Listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
