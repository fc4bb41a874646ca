//! [`ActorEntity`] implementation for [`Product`].

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductKind, ProductQuery, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::convert::Infallible;

const NAME_CHARS: std::ops::RangeInclusive<usize> = 2..=30;
const MIN_BEVERAGE_ML: u32 = 15;
/// Highest accepted unit price.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Query = ProductQuery;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        check_name(&params.name)?;
        check_price(params.price)?;
        check_kind(&params.kind)?;
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            image_url: params.image_url,
            kind: params.kind,
        })
    }

    /// Price changes only affect carts touched afterwards; placed orders keep their copy.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            check_name(&name)?;
            self.name = name;
        }
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &ProductQuery) -> bool {
        match query {
            ProductQuery::All => true,
            ProductQuery::OfType(product_type) => self.product_type() == *product_type,
        }
    }
}

fn check_name(name: &str) -> Result<(), ProductError> {
    if NAME_CHARS.contains(&name.trim().chars().count()) {
        Ok(())
    } else {
        Err(ProductError::InvalidName(name.to_string()))
    }
}

fn check_price(price: Decimal) -> Result<(), ProductError> {
    if price > Decimal::ZERO && price <= MAX_PRICE {
        Ok(())
    } else {
        Err(ProductError::InvalidPrice(price))
    }
}

fn check_kind(kind: &ProductKind) -> Result<(), ProductError> {
    match kind {
        ProductKind::Beverage { milliliters } if *milliliters < MIN_BEVERAGE_ML => {
            Err(ProductError::InvalidVolume(*milliliters))
        }
        ProductKind::Food { grams: 0, .. } => Err(ProductError::InvalidWeight),
        _ => Ok(()),
    }
}
