//! initforge server - HTTP wrapper around the project generator
//!
//! One POST endpoint accepts a JSON `ProjectConfig` and responds with the
//! generated project archive; a GET endpoint serves the database catalog to
//! wizard collectors.

mod config;
mod handlers;
mod routes;


use anyhow::{Context, Result};
use config::ServerConfig;
use routes::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let state = AppState::from_config(&config);
    let router = routes::create_router(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, auth = config.auth_token.is_some(), "initforge server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
