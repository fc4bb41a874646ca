//! The per-user shopping cart.
//!
//! A cart holds at most one line per product and caches `total`, which always equals the sum of
//! its line prices. Each line also caches its own `price` (quantity × unit price as of the last
//! time the line was touched) together with a snapshot of the product it refers to.

use super::pricing::{self, PriceOverflow};
use super::{CartId, CartLineId, Product, ProductId, ProductType, UserId};
use rust_decimal::Decimal;
use serde::Serialize;

/// Product reference data copied into a cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub product_type: ProductType,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            product_type: product.product_type(),
            unit_price: product.price,
            image_url: product.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub id: CartLineId,
    pub product: ProductSnapshot,
    pub quantity: u32,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub id: CartId,
    pub owner: UserId,
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    #[serde(skip)]
    next_line_id: u32,
}

#[derive(Debug, Clone)]
pub struct CartCreate {
    pub owner: UserId,
}

impl Cart {
    pub fn new(id: CartId, owner: UserId) -> Self {
        Self {
            id,
            owner,
            lines: Vec::new(),
            total: Decimal::ZERO,
            next_line_id: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_for(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.product.product_id == product_id)
    }

    /// Adds one unit of `product`: a new line with quantity 1, or one more on the existing line.
    /// The touched line takes the product's current data and price. On overflow the cart is
    /// left as it was.
    pub fn add_product(&mut self, product: &Product) -> Result<CartLine, PriceOverflow> {
        let existing = self
            .lines
            .iter()
            .position(|line| line.product.product_id == product.id);
        let quantity = existing.map_or(1, |index| self.lines[index].quantity.saturating_add(1));
        let price = pricing::line_price(product.price, quantity)?;
        let others = self
            .lines
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != existing)
            .map(|(_, line)| line.price);
        let total = pricing::total(others.chain(std::iter::once(price)))?;

        let snapshot = ProductSnapshot::from(product);
        let touched = match existing {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = quantity;
                line.product = snapshot;
                line.price = price;
                line.clone()
            }
            None => {
                let line = CartLine {
                    id: CartLineId(self.next_line_id),
                    product: snapshot,
                    quantity,
                    price,
                };
                self.next_line_id += 1;
                self.lines.push(line.clone());
                line
            }
        };
        self.total = total;
        Ok(touched)
    }

    /// Removes a line; `None` if this cart has no line with that id.
    pub fn remove_line(&mut self, id: CartLineId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.id == id)?;
        let removed = self.lines.remove(index);
        self.total -= removed.price;
        Some(removed)
    }

    /// Empties the cart. Line ids keep counting up.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.total = Decimal::ZERO;
    }
}
