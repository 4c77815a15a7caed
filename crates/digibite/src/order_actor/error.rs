//! Error types for the order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An order needs at least one line.
    #[error("Order has no items")]
    EmptyOrder,

    /// Placed orders only change through status transitions.
    #[error("Orders cannot be edited after checkout")]
    Immutable,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
