//! Chat endpoint: validate, echo, record.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use reverb_core::{ChatInput, ChatOutput};

use crate::dto::ChatRequest;
use crate::error::AppError;
use crate::ServerState;

/// Processes a chat input and returns the echoed output.
///
/// A missing or empty `input` field is rejected with 400 before the
/// processor is touched, so failed requests never appear in the history.
pub async fn chat(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatOutput>, AppError> {
    let input = match req.input {
        Some(input) if !input.is_empty() => input,
        _ => return Err(AppError::BadRequest("Missing input field".into())),
    };

    info!("Chat request: {}...", input.get(..50).unwrap_or(&input));

    let mut processor = state.processor_lock()?;
    let output = processor.process(ChatInput { input, history: req.history });

    Ok(Json(output))
}
