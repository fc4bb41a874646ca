//! # Framework Errors
//!
//! Errors produced by the channel plumbing, plus a boxed slot for the entity's own error type.

use std::error::Error as StdError;

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
    EntityError(Box<dyn StdError + Send + Sync>),
}

impl FrameworkError {
    /// Wraps a domain error raised by one of the entity hooks.
    pub fn entity<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the concrete entity error, if this is one of type `E`.
    ///
    /// Anything else (transport failures, a different error type) is handed back unchanged so the
    /// caller can still report it.
    ///
    /// ```
    /// use actor_framework::FrameworkError;
    ///
    /// #[derive(Debug, thiserror::Error, PartialEq)]
    /// #[error("cart line {0} not found")]
    /// struct LineMissing(u32);
    ///
    /// let err = FrameworkError::entity(LineMissing(7));
    /// assert_eq!(err.downcast_entity::<LineMissing>().ok(), Some(LineMissing(7)));
    ///
    /// let closed = FrameworkError::ActorClosed.downcast_entity::<LineMissing>();
    /// assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    /// ```
    pub fn downcast_entity<E: StdError + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|boxed| *boxed)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
