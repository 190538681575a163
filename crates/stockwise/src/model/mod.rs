//! Domain types. Plain serde data; behavior lives in the engine and actors.

pub mod catalog;
pub mod history;
pub mod order;
pub mod product;
pub mod report;
pub mod signal;
pub mod stock;
pub mod suggestion;

pub use catalog::*;
pub use history::*;
pub use order::*;
pub use product::*;
pub use report::*;
pub use signal::*;
pub use stock::*;
pub use suggestion::*;
