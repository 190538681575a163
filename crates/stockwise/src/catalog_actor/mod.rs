//! # Catalog Actor
//!
//! The inventory record store: one [`CatalogItem`] per SKU, holding the
//! product, its stock level and its demand signal.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`CatalogItem`]
//! - [`error`] - [`CatalogError`]
//! - [`actions`] - [`CatalogAction`] and [`CatalogActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use stockwise::catalog_actor;
//! use stockwise::clients::CatalogClient;
//! use stockwise::model::{CatalogItem, Category, DemandSignal, Product, StockLevel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog_actor::new();
//!     let client = CatalogClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let item = CatalogItem::new(
//!         Product::new("BRD-003", "Whole Grain Bread", Category::Bakery, 2.49, "Bakery Fresh"),
//!         StockLevel::new(8, 15, 30, 120),
//!         DemandSignal::new(95.0, 22.0),
//!     );
//!     client.insert_item(item).await?;
//!
//!     let level = client.receive_stock("BRD-003".into(), 40).await?;
//!     assert_eq!(level, 48);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::CatalogItem;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Catalog actor and its client.
pub fn new() -> (ResourceActor<CatalogItem>, ResourceClient<CatalogItem>) {
    ResourceActor::new(64)
}
