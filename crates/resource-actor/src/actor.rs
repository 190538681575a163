//! # Generic Actor Server
//!
//! The `ResourceActor` owns the store of one entity type and processes its
//! requests one at a time, so the store needs no locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The actor is the "server" half: it owns the `store` and the receiving end
/// of the channel. Each actor runs in its own Tokio task and handles messages
/// sequentially, which is what gives callers a consistent snapshot of an
/// entity per request (a catalog record's stock and demand signal are always
/// read together).
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Bin { id: u32, units: u32 }
/// #[derive(Debug)] struct BinCreate { units: u32 }
/// #[derive(Debug)] struct BinUpdate;
/// #[derive(Debug)] enum BinAction {}
/// #[derive(Debug, thiserror::Error)] #[error("bin error")] struct BinError;
///
/// #[async_trait]
/// impl ActorEntity for Bin {
///     type Id = u32; type Create = BinCreate; type Update = BinUpdate;
///     type Action = BinAction; type ActionResult = (); type Context = (); type Error = BinError;
///
///     fn from_create_params(id: u32, p: BinCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, units: p.units })
///     }
///     async fn on_update(&mut self, _: BinUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: BinAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Bin>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.create(BinCreate { units: 4 }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().units, 4);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: next id from the `u32` counter, `from_create_params`,
///   `on_create`, store, return the id.
/// * **Insert**: `on_create` on the given entity, then store it under the
///   given id, returning the entity it replaced.
/// * **Get** / **List**: clones of the stored state.
/// * **Update** / **Action**: the hook runs on a working copy which replaces
///   the stored entity only on success.
/// * **Delete**: `on_delete`, then removal.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mpsc capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "CatalogItem" rather than "stockwise::model::catalog::CatalogItem"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let result = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => match item.on_create(&context).await {
                            Ok(()) => {
                                self.store.insert(id.clone(), item);
                                info!(entity_type, %id, size = self.store.len(), "Created");
                                Ok(id)
                            }
                            Err(e) => {
                                warn!(entity_type, error = %e, "on_create failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Insert {
                    id,
                    mut entity,
                    respond_to,
                } => {
                    debug!(entity_type, %id, "Insert");
                    if let Err(e) = entity.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "Insert rejected");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let previous = self.store.insert(id.clone(), entity);
                    info!(
                        entity_type,
                        %id,
                        replaced = previous.is_some(),
                        size = self.store.len(),
                        "Inserted"
                    );
                    let _ = respond_to.send(Ok(previous));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self
                        .store
                        .iter()
                        .map(|(id, item)| (id.clone(), item.clone()))
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut working = item.clone();
                    let result = match working.on_update(update, &context).await {
                        Ok(()) => {
                            *item = working;
                            info!(entity_type, %id, "Updated");
                            Ok(item.clone())
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut working = item.clone();
                    let result = match working.handle_action(action, &context).await {
                        Ok(outcome) => {
                            *item = working;
                            info!(entity_type, %id, "Action ok");
                            Ok(outcome)
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
