//! Typed handles for the domain actors.
//!
//! Each client wraps a [`ResourceClient`](resource_actor::ResourceClient), inherits
//! `get`/`list`/`delete` from [`ActorClient`](resource_actor::ActorClient) and adds
//! the calls its callers actually make. Runtime failures come back as the actor's
//! own error type; entity errors are passed through unchanged.

pub mod account_client;
pub mod catalog_client;
pub mod order_client;
pub mod payment_client;
pub mod tenant_client;

pub use account_client::AccountClient;
pub use catalog_client::CatalogClient;
pub use order_client::OrderClient;
pub use payment_client::PaymentClient;
pub use tenant_client::TenantClient;

/// Case-insensitive substring match. A blank needle matches everything.
pub(crate) fn matches_query(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty() || haystacks.iter().any(|h| h.to_lowercase().contains(&needle))
}
