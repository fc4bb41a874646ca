//! # Yummy Delivery
//!
//! Cart and order core of a food-delivery backend, built on `actor_framework`.
//!
//! - [`model`]: entities, payloads and pricing helpers
//! - `*_actor`: the [`ActorEntity`](actor_framework::ActorEntity) implementation, errors and
//!   actions of each resource
//! - [`clients`]: typed wrappers over each actor's `ResourceClient`
//! - [`storefront`]: the caller-facing operations, with authentication checks
//! - [`lifecycle`]: [`DeliverySystem`](lifecycle::DeliverySystem) and the
//!   [`OrderSweeper`](lifecycle::OrderSweeper)
//! - [`config`], [`clock`], [`auth`]: runtime configuration, time source, caller identity

pub mod address_actor;
pub mod auth;
pub mod cart_actor;
pub mod clients;
pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod storefront;
pub mod user_actor;
