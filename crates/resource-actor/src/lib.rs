//! # Resource Actor
//!
//! Generic, type-safe actors for stateful resources. Each resource type (a
//! catalog record, a reorder suggestion, a purchase order) is owned by one
//! [`ResourceActor`] running in its own Tokio task; the rest of the program
//! talks to it through a cloneable [`ResourceClient`].
//!
//! ## Why actors here
//!
//! - **Isolated state**: the store lives inside the task, no `Mutex` around it.
//! - **Sequential processing**: one message at a time per actor, so a request
//!   always sees a consistent snapshot of an entity.
//! - **Uniform surface**: every resource gets the same Create / Insert / Get /
//!   List / Update / Delete / Action messages.
//!
//! Further reading: [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/).
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the business rules of one resource.
//! 2. **Runtime** ([`ResourceActor`]): the message loop and the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls.
//!
//! ## Context injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor,
//! so all actors can be created first and wired afterwards:
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Bin { id: u32, units: u32 }
//! #[derive(Debug)] struct BinCreate { units: u32 }
//! #[derive(Debug)] enum BinAction { Count }
//! #[derive(Debug, thiserror::Error)] #[error("bin error")] struct BinError;
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32; type Create = BinCreate; type Update = ();
//!     type Action = BinAction; type ActionResult = u32; type Context = (); type Error = BinError;
//!     fn from_create_params(id: u32, p: BinCreate) -> Result<Self, Self::Error> { Ok(Self { id, units: p.units }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: BinAction, _: &()) -> Result<u32, Self::Error> { Ok(self.units) }
//! }
//!
//! // A picker needs to read bins, so its context is the bin client.
//! #[derive(Clone, Debug)] struct Pick { id: u32, bin: u32, units: u32 }
//! #[derive(Debug)] struct PickCreate { bin: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("pick error")] struct PickError;
//!
//! #[async_trait]
//! impl ActorEntity for Pick {
//!     type Id = u32; type Create = PickCreate; type Update = ();
//!     type Action = (); type ActionResult = (); type Context = ResourceClient<Bin>; type Error = PickError;
//!     fn from_create_params(id: u32, p: PickCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, bin: p.bin, units: 0 })
//!     }
//!     async fn on_create(&mut self, bins: &ResourceClient<Bin>) -> Result<(), Self::Error> {
//!         self.units = bins.perform_action(self.bin, BinAction::Count).await.map_err(|_| PickError)?;
//!         Ok(())
//!     }
//!     async fn on_update(&mut self, _: (), _: &ResourceClient<Bin>) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &ResourceClient<Bin>) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (bin_actor, bins) = ResourceActor::<Bin>::new(10);
//!     let (pick_actor, picks) = ResourceActor::<Pick>::new(10);
//!     tokio::spawn(bin_actor.run(()));
//!     tokio::spawn(pick_actor.run(bins.clone()));
//!
//!     let bin = bins.create(BinCreate { units: 12 }).await.unwrap();
//!     let pick = picks.create(PickCreate { bin }).await.unwrap();
//!     assert_eq!(picks.get(pick).await.unwrap().unwrap().units, 12);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock`] provides [`MockClient`](mock::MockClient) to script an actor's
//! responses when testing the code around a client.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
