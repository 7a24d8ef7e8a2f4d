//! Data transfer objects for HTTP message serialization.

use chrono::{DateTime, Utc};
use reverb_core::ChatHistoryEntry;
use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint.
///
/// `input` is optional at the wire level so that a missing field reaches the
/// handler as `None` and gets the documented 400 instead of a generic
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub history: Vec<ChatHistoryEntry>,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}
