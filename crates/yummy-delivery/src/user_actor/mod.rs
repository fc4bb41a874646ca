//! # User Actor
//!
//! Owns registered users. Creating a user also opens that user's cart: the `on_create` hook
//! asks the cart actor for an empty cart, so the actor runs with a
//! [`CartClient`](crate::clients::CartClient) as its context.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::User;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new User actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<User>, ResourceClient<User>) {
    ResourceActor::new(buffer)
}
