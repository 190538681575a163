//! Error types for the Suggestion actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SuggestionError {
    /// No open suggestion exists for the SKU (never generated, or already
    /// accepted or rejected).
    #[error("Suggestion not found: {0}")]
    NotFound(String),

    /// The quantity is outside `[0, max_stock - current_stock]`, or zero on accept.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SuggestionError {
    fn from(msg: String) -> Self {
        SuggestionError::ActorCommunicationError(msg)
    }
}
