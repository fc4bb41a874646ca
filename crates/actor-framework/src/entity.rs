//! # ActorEntity Trait
//!
//! The contract every resource (cart, order, product, address, user) implements so that a
//! generic [`ResourceActor`](crate::ResourceActor) can own it. Associated types pin down the
//! payloads for each request kind, so a cart payload can never reach the order actor.
//!
//! # Hooks run on a working copy
//! `on_update` and `handle_action` receive a clone of the stored entity. The actor writes the
//! clone back only when the hook returns `Ok`, so a hook that fails halfway through leaves the
//! stored entity exactly as it was. Hooks may await other actors through `Context`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// Resources that never change after creation use [`std::convert::Infallible`] as their
/// `Update` type; resources without custom operations do the same for `Action`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier, generated by the actor from a monotonically increasing `u32`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload used to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `AddItem`, `Checkout`).
    type Action: Send + Sync + Debug;

    /// What a custom action hands back to the caller.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `Query` requests. Use `()` when the resource is only read by id.
    type Query: Send + Sync + Debug;

    /// Dependencies injected through `ResourceActor::run`. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Per-resource error type. It crosses the channel boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) and can be recovered
    /// with [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly allocated id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity is stored. An error aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update to the working copy.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the entity is removed. An error keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a custom action to the working copy.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether this entity belongs in the result of `query`.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }
}
