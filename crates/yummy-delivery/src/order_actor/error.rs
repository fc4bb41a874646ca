use crate::model::pricing::PriceOverflow;
use crate::model::{OrderId, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Order cost {order_cost} does not match its lines ({lines_total})")]
    CostMismatch {
        order_cost: Decimal,
        lines_total: Decimal,
    },

    #[error("Line for {0} is not quantity × unit price")]
    LinePriceMismatch(ProductId),

    #[error(transparent)]
    PriceOverflow(#[from] PriceOverflow),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
