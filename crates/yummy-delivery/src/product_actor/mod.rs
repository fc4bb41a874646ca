//! # Product Actor
//!
//! Owns the catalog. Products are created and edited by administrators; carts only read them.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`Product`], including field validation
//! - [`error`] - [`ProductError`]
//!
//! The actor has no dependencies (`Context = ()`) and no custom actions.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer)
}
