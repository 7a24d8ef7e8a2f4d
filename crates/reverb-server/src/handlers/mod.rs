//! HTTP route handlers for the echo agent server.

pub mod chat;
pub mod history;

use axum::Json;
use chrono::Utc;

use crate::dto::HealthResponse;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", timestamp: Utc::now() })
}
