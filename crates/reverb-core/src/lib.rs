//! Core domain types and the echo processor for reverb.
//!
//! This crate provides the fundamental types shared across the reverb agent:
//!
//! - [`ProcessorError`] — Error type for processor operations
//! - [`ChatInput`] and [`ChatOutput`] — Chat request/response structures
//! - [`Exchange`] — One recorded input/output/timestamp triple
//! - [`EchoProcessor`] — The identity-transform chat processor
//!
//! # Example
//!
//! ```rust
//! use reverb_core::{ChatInput, EchoProcessor};
//!
//! let mut processor = EchoProcessor::new();
//! let output = processor.process(ChatInput::new("Hello!"));
//!
//! assert_eq!(output.output, "Hello!");
//! assert_eq!(processor.history().len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by processor operations.
///
/// The echo transform itself cannot fail; this covers failures around the
/// processor, such as a poisoned lock on the shared instance.
#[derive(Error, Debug)]
pub enum ProcessorError {
    /// The shared processor state is no longer accessible.
    #[error("processor state unavailable: {0}")]
    StateUnavailable(String),
}

/// One recorded exchange: what came in, what went out, and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    /// The input text as received.
    pub input: String,
    /// The produced output text. For the echo processor this always
    /// equals `input`.
    pub output: String,
    /// When the exchange was processed (RFC 3339 on the wire).
    pub timestamp: DateTime<Utc>,
}

/// One prior input/output pair supplied by a caller.
///
/// Unlike [`Exchange`] this carries no timestamp: callers replay what they
/// saw, not when the server recorded it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub input: String,
    pub output: String,
}

/// Input structure for a chat processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatInput {
    /// The text to process.
    pub input: String,
    /// Prior exchanges supplied by the caller. The echo processor keeps
    /// its own log and does not read this field.
    #[serde(default)]
    pub history: Vec<ChatHistoryEntry>,
}

impl ChatInput {
    /// Creates a chat input with no caller-supplied history.
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into(), history: Vec::new() }
    }
}

/// Output structure from a chat processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutput {
    /// The input text, unchanged.
    pub input: String,
    /// The processed output text.
    pub output: String,
}

/// The simplest possible chat processor: output equals input.
///
/// Every successful [`process`](EchoProcessor::process) call appends one
/// [`Exchange`] to an in-memory log. The log is append-only and lives for
/// the lifetime of the processor; entries are never mutated or removed.
#[derive(Debug, Default)]
pub struct EchoProcessor {
    history: Vec<Exchange>,
}

impl EchoProcessor {
    /// Creates a processor with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Echoes the input back and records the exchange.
    ///
    /// Appends exactly one entry to the history per call. Timestamps are
    /// assigned here, so they are non-decreasing in insertion order.
    pub fn process(&mut self, chat_input: ChatInput) -> ChatOutput {
        let input = chat_input.input;
        let output = input.clone();

        self.history.push(Exchange {
            input: input.clone(),
            output: output.clone(),
            timestamp: Utc::now(),
        });

        ChatOutput { input, output }
    }

    /// Returns the accumulated log in insertion order.
    ///
    /// This is a view of live state: the log keeps growing as long as the
    /// processor handles calls.
    pub fn history(&self) -> &[Exchange] {
        &self.history
    }
}
