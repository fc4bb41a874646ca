//! Custom actions for the Cart actor.

use crate::model::{AddressId, CartLine, CartLineId, Order, ProductId};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of a product.
    AddItem(ProductId),
    /// Removes a whole line.
    RemoveItem(CartLineId),
    /// Turns the cart into an order delivered to the given address, then empties it.
    Checkout { address_id: AddressId },
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The line as it stands after the add.
    AddItem(CartLine),
    /// The removed line.
    RemoveItem(CartLine),
    /// The order as it was placed.
    Checkout(Order),
}
