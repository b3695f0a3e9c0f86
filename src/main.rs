//! Member & Deposit Gateway - Main Application Entry Point
//!
//! This is a REST API server that fronts a bank's financial open API. It registers and looks up members and opens deposit accounts, wrapping every result in a uniform JSON envelope.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Upstream**: Financial open API over HTTPS via reqwest
//! - **Format**: camelCase JSON requests, enveloped JSON responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the financial open API client and services
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

mod config;
mod error;
mod handlers;
mod models;
mod response;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Wire services against the bank
    let state = state::AppState::from_config(&config)?;
    tracing::info!(
        "Financial open API at {} (login fallback: {:?})",
        state.upstream,
        state.login_fallback
    );

    let app = routes::build_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
