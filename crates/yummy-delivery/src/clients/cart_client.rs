//! # Cart Client
//!
//! One method per cart action. Each call names the cart it targets; the storefront looks the
//! caller's cart up first, so a line id from someone else's cart simply isn't found.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{AddressId, Cart, CartCreate, CartId, CartLine, CartLineId, Order, ProductId, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

impl CartClient {
    #[instrument(skip(self))]
    pub async fn open_cart(&self, owner: UserId) -> Result<CartId, CartError> {
        self.inner
            .create(CartCreate { owner })
            .await
            .map_err(Self::map_error)
    }

    /// Current lines and total.
    #[instrument(skip(self))]
    pub async fn cart(&self, id: CartId) -> Result<Cart, CartError> {
        self.get(id).await?.ok_or(CartError::CartNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn add_item(&self, id: CartId, product_id: ProductId) -> Result<CartLine, CartError> {
        debug!("Adding one unit");
        match self.act(id, CartAction::AddItem(product_id)).await? {
            CartActionResult::AddItem(line) => Ok(line),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: CartId, line_id: CartLineId) -> Result<CartLine, CartError> {
        match self.act(id, CartAction::RemoveItem(line_id)).await? {
            CartActionResult::RemoveItem(line) => Ok(line),
            other => Err(unexpected(other)),
        }
    }

    /// Places an order for everything in the cart and empties it. Returns the placed order.
    #[instrument(skip(self))]
    pub async fn checkout(&self, id: CartId, address_id: AddressId) -> Result<Order, CartError> {
        match self.act(id, CartAction::Checkout { address_id }).await? {
            CartActionResult::Checkout(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }

    async fn act(&self, id: CartId, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => CartError::CartNotFound(id),
                other => Self::map_error(other),
            })
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
