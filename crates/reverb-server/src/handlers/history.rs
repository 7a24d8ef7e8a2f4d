//! History endpoint returning the full exchange log.

use std::sync::Arc;

use axum::{extract::State, Json};

use reverb_core::Exchange;

use crate::error::AppError;
use crate::ServerState;

/// Returns all recorded exchanges in arrival order.
pub async fn history(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<Vec<Exchange>>, AppError> {
    let processor = state.processor_lock()?;
    Ok(Json(processor.history().to_vec()))
}
