//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Domain failures raised inside an
//! entity hook travel inside [`FrameworkError::EntityError`] and can be recovered
//! with their concrete type through [`FrameworkError::entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Returns a copy of the entity error if this is an `EntityError` holding an `E`.
    ///
    /// Clients use this to hand their callers the same typed error the entity
    /// produced (e.g. `SuggestionError::InvalidQuantity`) rather than a string.
    pub fn entity_error<E>(&self) -> Option<E>
    where
        E: std::error::Error + Clone + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>().cloned(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    #[error("shelf is full")]
    struct ShelfFull;

    #[derive(Debug, Clone, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn entity_error_recovers_concrete_type() {
        let err = FrameworkError::EntityError(Box::new(ShelfFull));
        assert_eq!(err.entity_error::<ShelfFull>(), Some(ShelfFull));
        assert!(err.entity_error::<Other>().is_none());
    }

    #[test]
    fn entity_error_ignores_plumbing_failures() {
        assert!(FrameworkError::ActorClosed.entity_error::<ShelfFull>().is_none());
        assert!(FrameworkError::NotFound("BAN-001".into())
            .entity_error::<ShelfFull>()
            .is_none());
    }
}
