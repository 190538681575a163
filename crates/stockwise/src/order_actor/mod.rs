//! # Order Actor
//!
//! Purchase orders, created from accepted suggestions or placed manually,
//! and their status workflow.
//!
//! ## Dependencies
//!
//! The actor's context is `(SuggestionClient, CatalogClient)`:
//!
//! ```rust,ignore
//! let (order_actor, orders) = order_actor::new();
//! tokio::spawn(order_actor.run((suggestion_client.clone(), catalog_client.clone())));
//! ```
//!
//! Creating an order from a suggestion calls
//! [`SuggestionClient::accept`](crate::clients::SuggestionClient::accept);
//! delivering one calls
//! [`CatalogClient::receive_stock`](crate::clients::CatalogClient::receive_stock).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
