//! Error types for the Order actor.

use crate::catalog_actor::CatalogError;
use crate::model::OrderStatus;
use crate::suggestion_actor::SuggestionError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The product specified in the order does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// An order needs at least one unit.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The status change is not allowed from the current status.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Accepting the suggestion failed.
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),

    /// Reading or restocking the catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
