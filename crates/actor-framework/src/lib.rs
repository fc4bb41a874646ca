//! # Actor Framework
//!
//! Building blocks for resource-oriented actor systems on Tokio. Each resource type (a cart, an
//! order, a product) is owned by exactly one [`ResourceActor`], which processes requests
//! sequentially; callers talk to it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - domain state and its hooks
//! 2. **Runtime** ([`ResourceActor`]) - the request loop and in-memory store
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/reply
//!
//! ## Guarantees
//!
//! - Requests to one actor never interleave. A hook that awaits other actors still holds its own
//!   actor exclusively until it returns.
//! - `on_update` and `handle_action` run against a working copy that is committed only on `Ok`.
//! - Entity errors cross the channel boxed and come back out with
//!   [`FrameworkError::downcast_entity`].
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     id: u32,
//!     hits: u64,
//! }
//!
//! #[derive(Debug)]
//! struct Hit;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter overflow")]
//! struct Overflow;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = ();
//!     type Update = Infallible;
//!     type Action = Hit;
//!     type ActionResult = u64;
//!     type Query = ();
//!     type Context = ();
//!     type Error = Overflow;
//!
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, Self::Error> {
//!         Ok(Self { id, hits: 0 })
//!     }
//!
//!     async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), Self::Error> {
//!         match update {}
//!     }
//!
//!     async fn handle_action(&mut self, _: Hit, _: &()) -> Result<u64, Self::Error> {
//!         self.hits = self.hits.checked_add(1).ok_or(Overflow)?;
//!         Ok(self.hits)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(()).await.unwrap();
//!     client.perform_action(id, Hit).await.unwrap();
//!     assert_eq!(client.perform_action(id, Hit).await.unwrap(), 2);
//! }
//! ```
//!
//! Dependencies are injected through `run(context)` rather than at construction, so actors can
//! be created first and wired afterwards. See [`mock`] for testing an actor against scripted
//! dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
