//! teacher-roster server entry point.
//!
//! Starts the Axum HTTP server with the JSON API and the HTML pages.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use teacher_roster::app_state::AppState;
use teacher_roster::config::{LogFormat, RosterConfig};
use teacher_roster::persistence::{self, PostgresTeacherStore};
use teacher_roster::{api, pages};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = RosterConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting teacher-roster");

    // Build persistence layer
    let pool = persistence::connect(&config).context("invalid DATABASE_URL")?;
    let store = PostgresTeacherStore::new(pool);

    // Build application state
    let app_state = AppState::new(Arc::new(store));

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .merge(pages::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
