//! # Suggestion Engine
//!
//! Turns a catalog record (product, stock level, demand signal) into a
//! reorder [`Suggestion`](crate::model::Suggestion) with a quantity, a
//! confidence score, an urgency tier and the factors behind them.
//!
//! - [`evaluate`] - the pure per-record computation
//! - [`scan`] - runs [`evaluate`] over an [`InventoryRepository`](crate::repository::InventoryRepository)
//! - [`ranking`] - filtering and display order of the resulting list
//! - [`EngineConfig`] - the tunable constants

pub mod config;
pub mod error;
pub mod evaluate;
pub mod ranking;
pub mod scan;

pub use config::EngineConfig;
pub use error::EngineError;
pub use evaluate::{evaluate, validate_signal, validate_stock};
pub use ranking::{rank, select, SuggestionFilter};
pub use scan::scan;
