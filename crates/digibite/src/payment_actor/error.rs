//! Error types for the payment actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    #[error("Payment method not found: {0}")]
    NotFound(String),

    #[error("Payment method name must not be empty")]
    EmptyName,

    #[error("Payment method description must not be empty")]
    EmptyDescription,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PaymentError {
    fn from(msg: String) -> Self {
        PaymentError::ActorCommunicationError(msg)
    }
}
