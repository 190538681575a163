//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the inventory actors and the
//! operations that span more than one of them.
//!
//! ## The Orchestration Pattern
//!
//! Individual actors are simple; **wiring them together** is where the
//! complexity lives. [`InventorySystem`] is the conductor:
//!
//! 1. **Actor Creation** - instantiate the Catalog, Suggestion and Order actors
//! 2. **Dependency Injection** - the Order actor receives the other two clients as its context
//! 3. **Graceful Shutdown** - drop the clients, then await every actor task
//!
//! ## Dependency Injection via Context
//!
//! Actors are constructed without dependencies; they are injected by
//! `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for CatalogItem {
//!     type Context = ();
//! }
//!
//! impl ActorEntity for Order {
//!     type Context = (SuggestionClient, CatalogClient);
//! }
//! ```
//!
//! The graph is acyclic (Order → Suggestion, Order → Catalog), so closing
//! the channels shuts everything down without an explicit shutdown action.
//!
//! ## Cross-actor Operations
//!
//! [`Inventory`] is the handle the HTTP layer holds. It owns the engine
//! configuration and decides when the suggestion set is rebuilt: at startup,
//! on demand, and after any write that changes the engine's inputs.
//!
//! [`fixtures`] holds the built-in demo catalog, the demo forecast history
//! and the JSON seed loader.

pub mod fixtures;
pub mod inventory;
pub mod inventory_system;

pub use inventory::{Inventory, InventoryError};
pub use inventory_system::InventorySystem;
