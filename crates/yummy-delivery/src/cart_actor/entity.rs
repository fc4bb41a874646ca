//! [`ActorEntity`] implementation for [`Cart`].
//!
//! Add and remove are plain cart arithmetic (see [`crate::model::cart`]). Checkout talks to the
//! address book and the order actor before touching the cart.

use super::{CartAction, CartActionResult, CartContext, CartError};
use crate::address_actor::AddressError;
use crate::model::{AddressId, Cart, CartCreate, CartId, Order, OrderCreate, OrderLine};
use crate::product_actor::ProductError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::info;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = Infallible;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Query = ();
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id, params.owner))
    }

    async fn on_update(&mut self, update: Infallible, _: &CartContext) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddItem(product_id) => {
                let product = ctx.products.lookup(product_id).await.map_err(|e| match e {
                    ProductError::NotFound(id) => CartError::ProductNotFound(id),
                    other => CartError::ActorCommunicationError(other.to_string()),
                })?;
                let line = self
                    .add_product(&product)
                    .map_err(|_| CartError::PriceOverflow(product.id))?;
                Ok(CartActionResult::AddItem(line))
            }
            CartAction::RemoveItem(line_id) => self
                .remove_line(line_id)
                .map(CartActionResult::RemoveItem)
                .ok_or(CartError::CartItemNotFound(line_id)),
            CartAction::Checkout { address_id } => {
                checkout(self, address_id, ctx).await.map(CartActionResult::Checkout)
            }
        }
    }
}

async fn checkout(
    cart: &mut Cart,
    address_id: AddressId,
    ctx: &CartContext,
) -> Result<Order, CartError> {
    let delivery_address = ctx
        .addresses
        .resolve(address_id, cart.owner)
        .await
        .map_err(|e| match e {
            AddressError::NotFound(id) => CartError::AddressNotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        })?;

    let order = OrderCreate {
        placed_by: cart.owner,
        placed_at: ctx.clock.now(),
        order_cost: cart.total,
        delivery_address,
        lines: cart.lines.iter().map(OrderLine::from).collect(),
    };
    let order_id = ctx
        .orders
        .place(order.clone())
        .await
        .map_err(CartError::OrderRejected)?;

    cart.clear();
    info!(cart_id = %cart.id, %order_id, "Checked out");
    Ok(Order::placed(order_id, order))
}
