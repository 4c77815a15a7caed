//! # Tenant Actor
//!
//! Owns the food court's vendor accounts. Admins register tenants, edit their
//! profiles and switch them on or off; buyers only ever see active ones.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Tenant`]
//! - [`error`] - [`TenantError`]
//! - [`actions`] - [`TenantAction`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TenantClient;
use crate::model::Tenant;
use resource_actor::ResourceActor;

/// Creates a new tenant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Tenant>, TenantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, TenantClient::new(generic_client))
}
