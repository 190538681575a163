//! # Generic Messages
//!
//! The request enum exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants are the resource lifecycle: CRUD, plus two store-level
/// operations and a custom `Action` for domain behaviour.
///
/// - **Create**: builds an entity from [`ActorEntity::Create`] under a generated id.
/// - **Insert**: stores an entity under a caller-chosen id (catalog SKUs,
///   per-product suggestions). Replaces any existing entry and returns it.
/// - **Get**: snapshot of one entity.
/// - **List**: snapshot of every entity with its id.
/// - **Update**: applies an [`ActorEntity::Update`] and returns the new state.
/// - **Delete**: removes the entity.
/// - **Action**: runs an [`ActorEntity::Action`] against the entity.
///
/// Every payload type comes from the entity's associated types, so a catalog
/// update can never be sent to the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Insert {
        id: T::Id,
        entity: T,
        respond_to: Response<Option<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<(T::Id, T)>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
