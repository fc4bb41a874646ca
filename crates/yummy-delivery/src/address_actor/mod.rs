//! # Address Actor
//!
//! Owns every user's delivery addresses. Addresses are immutable once created; they can only be
//! added, listed by owner, resolved for a given owner, or removed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Address;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Address actor and its client.
pub fn new(buffer: usize) -> (ResourceActor<Address>, ResourceClient<Address>) {
    ResourceActor::new(buffer)
}
