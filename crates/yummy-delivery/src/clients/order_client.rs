//! # Order Client
use crate::model::{newest_first, Order, OrderCreate, OrderId, OrderQuery, OrderStatus, UserId};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

impl OrderClient {
    /// Stores a checked-out cart as a new PROCESSING order.
    #[instrument(skip(self, order), fields(placed_by = %order.placed_by))]
    pub async fn place(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "place called");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Every order of `user`, newest first.
    #[instrument(skip(self))]
    pub async fn placed_by(&self, user: UserId) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.query(OrderQuery::PlacedBy(user)).await?;
        newest_first(&mut orders);
        Ok(orders)
    }

    /// Every order still PROCESSING, newest first.
    #[instrument(skip(self))]
    pub async fn processing(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self
            .query(OrderQuery::WithStatus(OrderStatus::Processing))
            .await?;
        newest_first(&mut orders);
        Ok(orders)
    }

    /// Delivers the order if it is due. Returns whether it was promoted by this call.
    #[instrument(skip(self))]
    pub async fn promote(
        &self,
        id: OrderId,
        as_of: DateTime<Utc>,
        dwell: TimeDelta,
    ) -> Result<bool, OrderError> {
        self.inner
            .perform_action(id, OrderAction::Promote { as_of, dwell })
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => OrderError::NotFound(id),
                other => Self::map_error(other),
            })
    }
}
