//! # Order Actor
//!
//! Stores placed orders. Orders arrive fully formed from the cart actor's checkout and are
//! validated once on creation; afterwards the only change an order ever sees is the
//! PROCESSING → DELIVERED promotion requested by the [`OrderSweeper`](crate::lifecycle::OrderSweeper).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer)
}
