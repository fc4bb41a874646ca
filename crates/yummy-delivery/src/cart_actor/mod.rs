//! # Cart Actor
//!
//! Owns every user's cart and is the only place carts are mutated. A `ResourceActor` handles one
//! request at a time, so mutations of the same cart never interleave.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Cart`], including checkout
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`]
//!
//! ## Checkout
//!
//! `Checkout` runs entirely inside the cart actor:
//!
//! 1. resolve the delivery address against the cart's owner
//! 2. copy every line into an order and have the order actor store it
//! 3. clear the cart
//!
//! An empty cart checks out as an order costing zero. The cart is only cleared after the order
//! actor has acknowledged the new order, and a failed action leaves the stored cart untouched.
//!
//! ```rust,ignore
//! let line = carts.add_item(cart_id, pizza_id).await?;
//! let order = carts.checkout(cart_id, address_id).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{AddressClient, OrderClient, ProductClient};
use crate::clock::Clock;
use crate::model::Cart;
use actor_framework::{ResourceActor, ResourceClient};
use std::sync::Arc;

/// Dependencies of the cart actor.
#[derive(Clone)]
pub struct CartContext {
    pub products: ProductClient,
    pub addresses: AddressClient,
    pub orders: OrderClient,
    pub clock: Arc<dyn Clock>,
}

/// Creates a new Cart actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer)
}
