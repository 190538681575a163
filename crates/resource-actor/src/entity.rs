//! # ActorEntity Trait
//!
//! The contract a resource (catalog record, suggestion, order, ...) implements
//! to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin down the id, the DTOs, the actions and the error of
//! each resource, so a payload meant for one actor cannot reach another.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after `Create` and `Insert`. Use it to
//!   validate invariants or consult other actors through the context.
//! - [`ActorEntity::on_delete`] runs before removal.
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are async so an entity can call other actors (an order consumes a
/// suggestion while it is being created). The `Context` type carries those
/// dependencies and is injected by `ResourceActor::run`, not at construction,
/// so actors can be created first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier. Must be convertible from `u32` for generated ids;
    /// entities keyed by natural ids still implement the conversion.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ReceiveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per actor, covering every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the id and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is built or inserted, before it is stored.
    /// An error here aborts the create/insert and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. The hook runs against a
    /// working copy; the actor commits it only when the hook succeeds.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action. Same commit rule as `on_update`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
