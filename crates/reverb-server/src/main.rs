//! HTTP server entry point.
//!
//! Initializes logging, constructs the server state, and starts the Axum
//! server on the configured port (PORT env var, default 8000).

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use reverb_server::{app, ServerState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let state = Arc::new(ServerState::new());
    let router = app(state);

    let addr = format!("0.0.0.0:{port}");
    info!("Echo agent running on port {}", port);
    info!("Health check: http://localhost:{}/health", port);
    info!("Chat endpoint: http://localhost:{}/chat", port);
    info!("History endpoint: http://localhost:{}/history", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
