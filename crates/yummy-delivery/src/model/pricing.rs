//! Money arithmetic shared by carts and orders. All amounts are exact `Decimal`s.

use rust_decimal::Decimal;
use thiserror::Error;

/// An amount left the range `Decimal` can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Price arithmetic overflowed")]
pub struct PriceOverflow;

/// Price of `quantity` units at `unit_price`.
pub fn line_price(unit_price: Decimal, quantity: u32) -> Result<Decimal, PriceOverflow> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(PriceOverflow)
}

/// Sum of the given line prices; zero for no lines.
pub fn total<I>(prices: I) -> Result<Decimal, PriceOverflow>
where
    I: IntoIterator<Item = Decimal>,
{
    prices
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, price| sum.checked_add(price).ok_or(PriceOverflow))
}
