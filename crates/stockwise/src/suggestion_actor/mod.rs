//! # Suggestion Actor
//!
//! Holds the current suggestion set, one [`Suggestion`] per SKU, and applies
//! the accept / reject / modify workflow to it. The set is replaced wholesale
//! by [`Inventory::refresh_suggestions`](crate::lifecycle::Inventory::refresh_suggestions).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Suggestion;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Suggestion actor and its client.
pub fn new() -> (ResourceActor<Suggestion>, ResourceClient<Suggestion>) {
    ResourceActor::new(64)
}
