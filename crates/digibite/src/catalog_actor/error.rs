//! Error types for the catalog actor.

use crate::model::Price;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item name must not be empty")]
    EmptyName,

    /// Prices are whole Rupiah and must be positive.
    #[error("Invalid price: {0}")]
    InvalidPrice(Price),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
