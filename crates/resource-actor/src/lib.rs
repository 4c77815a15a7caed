//! # Resource Actor
//!
//! A small runtime for owning collections of stateful resources inside Tokio tasks.
//!
//! Every resource type (a menu item, a tenant, an order) gets one [`ResourceActor`].
//! The actor owns a keyed store of entities and serves a fixed vocabulary of requests
//! over an mpsc channel:
//!
//! - **Create** builds an entity from a DTO and assigns the next sequential id
//! - **Get** / **List** read one entity or the whole store, in creation order
//! - **Update** hands an update DTO to the entity
//! - **Delete** removes an entity
//! - **Action** runs a resource-specific operation (e.g. toggling availability)
//!
//! Requests are processed one at a time, so the store needs no locks.
//!
//! ## Layers
//!
//! 1. [`ActorEntity`]: the business rules of one resource type
//! 2. [`ResourceActor`]: the message loop that owns the store
//! 3. [`ResourceClient`] / [`ActorClient`]: the typed handle callers hold
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, value: u64 }
//! #[derive(Debug)] struct CounterCreate { start: u64 }
//! #[derive(Debug)] enum CounterAction { Bump }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = ();
//!     type Action = CounterAction;
//!     type ActionResult = u64;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: params.start })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<u64, Self::Error> {
//!         self.value += 1;
//!         Ok(self.value)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { start: 41 }).await.unwrap();
//!     assert_eq!(client.perform_action(id, CounterAction::Bump).await.unwrap(), 42);
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies reach entity hooks through [`ActorEntity::Context`], passed to
//! [`ResourceActor::run`] rather than to the constructor. Actors can therefore be
//! created first and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations so client
//! wrappers can be tested without a running actor.

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
