//! Catalog products.
//!
//! Managed by the product actor (`Context = ()`). Carts read them through
//! [`ProductClient::lookup`](crate::clients::ProductClient::lookup) and copy what they need into a
//! [`ProductSnapshot`](crate::model::ProductSnapshot), so later edits here never reach a placed
//! order.

use super::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub kind: ProductKind,
}

/// Kind-specific details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductKind {
    Food { grams: u32, ingredients: Vec<String> },
    Beverage { milliliters: u32 },
}

/// The bare FOOD / BEVERAGE tag, kept on order lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Food,
    Beverage,
}

impl ProductKind {
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Food { .. } => ProductType::Food,
            ProductKind::Beverage { .. } => ProductType::Beverage,
        }
    }
}

impl Product {
    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }
}

#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub kind: ProductKind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
}

/// Filter for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductQuery {
    All,
    OfType(ProductType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_with_type_tag() {
        let kind = ProductKind::Beverage { milliliters: 330 };
        let json = serde_json::to_value(&kind).unwrap();
        assert_eq!(json["type"], "BEVERAGE");
        assert_eq!(json["milliliters"], 330);
        assert_eq!(kind.product_type(), ProductType::Beverage);
    }
}
