//! # Account Actor
//!
//! The user directory behind the admin user table. Entries are added when the
//! demo data is seeded and on every successful sign-in; admins deactivate and
//! reactivate them.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Account`]
//! - [`error`] - [`AccountError`]
//! - [`actions`] - [`AccountAction`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::AccountClient;
use crate::model::Account;
use resource_actor::ResourceActor;

/// Creates a new account actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Account>, AccountClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AccountClient::new(generic_client))
}
