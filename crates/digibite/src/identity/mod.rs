//! # Identity
//!
//! Who is using the food court, and how that survives a restart.
//!
//! - [`provider`] - the [`IdentityProvider`] seam and its always-succeeding [`MockIdentity`]
//! - [`store`] - [`KeyValueStore`] with in-memory and file-backed implementations
//! - [`auth`] - [`Auth`], the persisted login state
//!
//! Only the identity is persisted. Carts and orders live and die with the process.

pub mod auth;
pub mod provider;
pub mod store;

pub use auth::*;
pub use provider::*;
pub use store::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Identity provider error: {0}")]
    Provider(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
