use crate::model::ProductId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Invalid product name {0:?}: expected 2 to 30 characters")]
    InvalidName(String),

    #[error("Invalid price {0}: must be greater than zero and at most 1000000")]
    InvalidPrice(Decimal),

    #[error("Invalid beverage volume {0} ml: at least 15 ml required")]
    InvalidVolume(u32),

    #[error("Invalid food weight: must be greater than zero")]
    InvalidWeight,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
