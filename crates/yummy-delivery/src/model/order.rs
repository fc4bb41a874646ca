//! Placed orders.
//!
//! An order is a frozen copy of a cart taken at checkout. Its lines, cost and delivery address
//! never change afterwards; `status` is the one field that moves, and only forward.

use super::pricing;
use super::{Address, CartLine, OrderId, ProductId, ProductType, UserId};
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Processing,
    Delivered,
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub product_type: ProductType,
    pub image_url: Option<String>,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub price: Decimal,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product.product_id,
            name: line.product.name.clone(),
            product_type: line.product.product_type,
            image_url: line.product.image_url.clone(),
            unit_price: line.product.unit_price,
            quantity: line.quantity,
            price: line.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_by: UserId,
    pub placed_at: DateTime<Utc>,
    pub order_cost: Decimal,
    pub status: OrderStatus,
    pub delivery_address: Address,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub placed_by: UserId,
    pub placed_at: DateTime<Utc>,
    pub order_cost: Decimal,
    pub delivery_address: Address,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderQuery {
    PlacedBy(UserId),
    WithStatus(OrderStatus),
}

impl Order {
    /// A freshly placed order: the snapshot as given, PROCESSING.
    pub fn placed(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            placed_by: params.placed_by,
            placed_at: params.placed_at,
            order_cost: params.order_cost,
            status: OrderStatus::Processing,
            delivery_address: params.delivery_address,
            lines: params.lines,
        }
    }

    /// Whether the order has been processing for at least `dwell` as of `now`.
    pub fn is_due(&self, now: DateTime<Utc>, dwell: TimeDelta) -> bool {
        self.status == OrderStatus::Processing && now - self.placed_at >= dwell
    }

    /// Moves a due order to DELIVERED. Returns whether the status changed.
    pub fn promote_if_due(&mut self, now: DateTime<Utc>, dwell: TimeDelta) -> bool {
        if !self.is_due(now, dwell) {
            return false;
        }
        self.status = OrderStatus::Delivered;
        true
    }

    pub fn lines_total(&self) -> Result<Decimal, pricing::PriceOverflow> {
        pricing::total(self.lines.iter().map(|line| line.price))
    }
}

/// Sorts most recent first; orders placed at the same instant go by descending id.
pub fn newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at).then(b.id.cmp(&a.id)));
}
