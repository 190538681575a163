//! Error types for the Catalog actor.

use crate::engine::EngineError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No catalog record exists for the SKU.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The stock thresholds are inconsistent.
    #[error("Invalid stock level: {0}")]
    InvalidStockLevel(String),

    /// The demand signal is unusable.
    #[error("Invalid demand signal: {0}")]
    InvalidSignal(String),

    /// A received quantity of zero.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}

impl From<EngineError> for CatalogError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidStockLevel(msg) => CatalogError::InvalidStockLevel(msg),
            EngineError::InvalidSignal(msg) => CatalogError::InvalidSignal(msg),
        }
    }
}
