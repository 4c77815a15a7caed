//! # Order Actor
//!
//! The order log. Checkout appends orders; sellers and admins move them through
//! their status lifecycle. Nothing else about an order changes after it is placed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor runs with a [`SharedClock`](crate::clock::SharedClock) so status
//! transitions can stamp `updated_at`:
//!
//! ```rust,ignore
//! let (actor, orders) = order_actor::new(32);
//! tokio::spawn(actor.run(Arc::new(SystemClock) as SharedClock));
//! ```
//!
//! ## Status transitions
//!
//! Any status may move to any other, including back out of `delivered` or
//! `cancelled`. Only the current status is kept.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
