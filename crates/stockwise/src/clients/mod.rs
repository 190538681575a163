//! Typed clients, one per actor. Each wraps a `ResourceClient` and implements
//! [`ActorClient`](resource_actor::ActorClient) for the shared `get` / `list` /
//! `delete` surface.

pub mod catalog_client;
pub mod order_client;
pub mod suggestion_client;

pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;
pub use suggestion_client::SuggestionClient;
