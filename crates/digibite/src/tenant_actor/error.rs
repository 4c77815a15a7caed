//! Error types for the tenant actor.

use thiserror::Error;

/// Errors that can occur during tenant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TenantError {
    #[error("Tenant not found: {0}")]
    NotFound(String),

    #[error("Tenant name must not be empty")]
    EmptyName,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TenantError {
    fn from(msg: String) -> Self {
        TenantError::ActorCommunicationError(msg)
    }
}
