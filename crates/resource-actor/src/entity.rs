//! # ActorEntity Trait
//!
//! The contract a resource type implements to be owned by a
//! [`ResourceActor`](crate::ResourceActor): associated types for its id, DTOs,
//! actions, injected context and error, plus lifecycle hooks.
//!
//! `on_create` and `on_delete` have default no-op implementations.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource managed by a [`ResourceActor`](crate::ResourceActor).
///
/// Hooks are async so they can consult other actors through clients carried in
/// [`ActorEntity::Context`].
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier of one entity. Built from the actor's sequential `u32` counter;
    /// `Ord` keeps listings in creation order.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating an entity.
    type Create: Send + Sync + Debug;

    /// Payload for updating an entity. Use `()` for resources without updates.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Value returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected through [`ResourceActor::run`](crate::ResourceActor::run).
    type Context: Send + Sync;

    /// One error enum per resource; every hook reports through it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its assigned id and the create payload.
    /// Runs synchronously before `on_create`; a failure here stores nothing.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before removal; an error keeps the entity stored.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
