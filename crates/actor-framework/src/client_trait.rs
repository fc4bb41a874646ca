//! # ActorClient Trait
//!
//! Shared plumbing for resource-specific client wrappers: they expose their inner
//! `ResourceClient`, say how framework errors become their own error type, and get `get` and
//! `query` for free.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// `map_error` usually tries [`FrameworkError::downcast_entity`] first so that domain errors
/// raised inside the actor surface with their original variant.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `query`.
    #[tracing::instrument(skip(self))]
    async fn query(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().query(query).await.map_err(Self::map_error)
    }
}
