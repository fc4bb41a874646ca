//! # System Lifecycle
//!
//! [`DeliverySystem`] creates every actor, injects each one's dependencies through
//! `run(context)`, starts the [`OrderSweeper`] and tears everything down again.
//!
//! The dependency graph is acyclic:
//!
//! ```text
//! User -> Cart -> { Product, Address, Order }
//! Sweeper -> Order
//! ```
//!
//! so shutdown is just cancelling the sweeper and dropping the clients. Each actor exits when its
//! channel closes, which releases the clients held in its context, which closes the next
//! channel down the graph.

pub mod delivery_system;
pub mod sweeper;

pub use delivery_system::*;
pub use sweeper::*;
