//! location-gallery server entry point.
//!
//! Loads configuration, connects the location store, and serves the REST
//! API until interrupted.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use location_gallery::api;
use location_gallery::app_state::AppState;
use location_gallery::config::{GalleryConfig, LogFormat};
use location_gallery::persistence;
use location_gallery::service::LocationService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GalleryConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting location-gallery");

    // Build persistence and service layers
    let store = persistence::connect(&config)
        .await
        .context("connecting location store")?;
    let location_service = LocationService::new(store, config.paging);

    // Build router
    let app = api::build_app(AppState::new(location_service), config.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
