use crate::model::{AddressId, CartId, CartLineId, ProductId};
use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Cart not found: {0}")]
    CartNotFound(CartId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Unknown address, or one owned by another user.
    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    /// The line does not exist in this cart.
    #[error("Cart item not found: {0}")]
    CartItemNotFound(CartLineId),

    /// The line or cart total would not fit in a `Decimal`.
    #[error("Price overflow adding product {0}")]
    PriceOverflow(ProductId),

    #[error("Order rejected: {0}")]
    OrderRejected(OrderError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
