//! HTTP boundary for the reverb echo agent.
//!
//! Exposes three routes over the shared [`EchoProcessor`]:
//!
//! - `POST /chat` — echo an input and record the exchange
//! - `GET /history` — the full exchange log in arrival order
//! - `GET /health` — liveness check
//!
//! State is held in a [`ServerState`] constructed once at startup and passed
//! to handlers through Axum's state extractor. The processor is the only
//! shared mutable value; a single mutex keeps log appends sequential.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use reverb_core::{EchoProcessor, ProcessorError};

/// Shared server state accessible from all handlers.
pub struct ServerState {
    processor: Mutex<EchoProcessor>,
}

impl ServerState {
    /// Creates state with a fresh, empty processor.
    pub fn new() -> Self {
        Self { processor: Mutex::new(EchoProcessor::new()) }
    }

    /// Acquires the processor lock, reporting poison as a processor error.
    pub fn processor_lock(&self) -> Result<MutexGuard<'_, EchoProcessor>, ProcessorError> {
        self.processor.lock().map_err(|e| {
            tracing::error!("processor lock poisoned: {}", e);
            ProcessorError::StateUnavailable("processor lock poisoned".into())
        })
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the application router with CORS and request tracing.
pub fn app(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/history", get(handlers::history::history))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
