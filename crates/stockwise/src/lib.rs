//! # Stockwise
//!
//! Reorder suggestions for a retail inventory, served over HTTP.
//!
//! - **[model]**: pure data ([`CatalogItem`](model::CatalogItem), [`Suggestion`](model::Suggestion), [`Order`](model::Order))
//! - **[engine]**: the suggestion engine and its ranking
//! - **[catalog_actor]**, **[suggestion_actor]**, **[order_actor]**: the entities managed by
//!   [`resource_actor::ResourceActor`]
//! - **[clients]**: typed wrappers that hide the message passing
//! - **[lifecycle]**: actor wiring and the cross-actor [`Inventory`](lifecycle::Inventory) operations
//! - **[api]**: the axum router
//! - **[config]**: environment configuration

pub mod api;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod repository;
pub mod suggestion_actor;
