//! # User Client
use crate::model::{CartId, User, UserCreate, UserId};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<UserError>()
            .unwrap_or_else(|e| UserError::ActorCommunicationError(e.to_string()))
    }
}

impl UserClient {
    /// Registers the user and opens their cart.
    #[instrument(skip(self, params))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!(?params, "create_user called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: UserId) -> Result<User, UserError> {
        self.get(id).await?.ok_or(UserError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn cart_of(&self, id: UserId) -> Result<CartId, UserError> {
        self.find(id).await?.cart_id.ok_or(UserError::NoCart(id))
    }
}
