//! # Generic Messages
//!
//! The request envelope sent from `ResourceClient` to `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to a `ResourceActor<T>`.
///
/// Create / Get / Update / Delete cover the lifecycle of a single resource, `Action` carries a
/// resource-specific operation, and `Query` returns every stored resource matching a filter.
/// Payload types come from the [`ActorEntity`] associated types.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Query {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
