//! Error types for the suggestion engine.

use thiserror::Error;

/// Input validation failures. The engine is otherwise total.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The stock thresholds break `safety <= reorder <= max`, or `max` is zero.
    #[error("Invalid stock level: {0}")]
    InvalidStockLevel(String),

    /// Predicted demand is negative, or a forecast value is not finite.
    #[error("Invalid demand signal: {0}")]
    InvalidSignal(String),
}
