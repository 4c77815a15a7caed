//! # Catalog Actor
//!
//! Owns every sellable [`Item`] in the food court.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Item`]
//! - [`error`] - [`CatalogError`]
//! - [`actions`] - [`CatalogAction`] and [`CatalogActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! Sellers edit their menu through [`CatalogClient`]; the cart only reads from it.
//!
//! ```rust
//! use digibite::catalog_actor;
//! use digibite::model::{ItemCreate, TenantId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_item(ItemCreate {
//!             tenant_id: TenantId(1),
//!             tenant_name: "Warung Bu Sri".into(),
//!             name: "Es Teh".into(),
//!             description: "Teh manis dingin".into(),
//!             category: "Minuman".into(),
//!             price: 5_000,
//!             stock: 40,
//!         })
//!         .await?;
//!
//!     assert!(!client.toggle_availability(id).await?);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Item;
use resource_actor::ResourceActor;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Item>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatalogClient::new(generic_client))
}
