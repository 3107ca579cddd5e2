//! Event bus error types.

use thiserror::Error;

/// Failure reported by a subscriber while handling an event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by [`EventBus::publish`](crate::EventBus::publish).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// A subscriber failed; later subscribers were not called.
    #[error("Handler for topic {topic} failed: {source}")]
    Handler {
        topic: String,
        #[source]
        source: HandlerError,
    },

    /// A subscriber published an event that routed back to itself.
    #[error("Handler for topic {topic} is already running")]
    Reentrant { topic: String },
}
