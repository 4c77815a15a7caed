//! # Runtime Errors
//!
//! Failures raised by the runtime itself, as opposed to the domain errors each
//! entity defines. Entity errors travel inside [`FrameworkError::EntityError`].

/// Errors that can occur while talking to a [`ResourceActor`](crate::ResourceActor).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's mailbox is closed; the actor task has stopped.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the reply channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity is stored under the requested id.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// An entity hook rejected the request.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error, if this is one.
    ///
    /// Clients use this to hand domain errors back to callers unchanged instead of
    /// flattening them into strings.
    pub fn entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("out of stock")]
    struct OutOfStock;

    #[test]
    fn test_entity_error_downcasts_to_original_type() {
        let err = FrameworkError::EntityError(Box::new(OutOfStock));
        assert_eq!(err.entity_error::<OutOfStock>().unwrap(), OutOfStock);
    }

    #[test]
    fn test_entity_error_leaves_other_variants_alone() {
        let err = FrameworkError::ActorClosed;
        assert!(matches!(
            err.entity_error::<OutOfStock>(),
            Err(FrameworkError::ActorClosed)
        ));
    }

    #[test]
    fn test_entity_error_keeps_foreign_entity_errors() {
        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        let back = err.entity_error::<OutOfStock>().unwrap_err();
        assert!(back.to_string().contains("disk"));
    }
}
