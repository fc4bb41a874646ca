//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper turns framework errors back into its resource's domain error:
//!
//! - entity errors are downcast to their original variant
//! - a missing id becomes that resource's `NotFound`
//! - transport failures become `ActorCommunicationError`

pub mod address_client;
pub mod cart_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use address_client::*;
pub use cart_client::*;
pub use order_client::*;
pub use product_client::*;
pub use user_client::*;
