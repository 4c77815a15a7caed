//! # Payment Actor
//!
//! Owns the payment methods the admin has configured. Checkout asks it which
//! codes are currently accepted.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`PaymentConfig`]
//! - [`error`] - [`PaymentError`]
//! - [`actions`] - [`PaymentAction`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::PaymentClient;
use crate::model::PaymentConfig;
use resource_actor::ResourceActor;

/// Creates a new payment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<PaymentConfig>, PaymentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PaymentClient::new(generic_client))
}
