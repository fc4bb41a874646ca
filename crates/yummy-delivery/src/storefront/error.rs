use crate::address_actor::AddressError;
use crate::cart_actor::CartError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use thiserror::Error;

/// Everything a storefront call can fail with.
///
/// Mapping to transport status codes is left to the caller; [`is_not_found`](Self::is_not_found)
/// covers the common case.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Administrator role required")]
    Forbidden,

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl StorefrontError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorefrontError::User(UserError::NotFound(_))
                | StorefrontError::Product(ProductError::NotFound(_))
                | StorefrontError::Address(AddressError::NotFound(_))
                | StorefrontError::Cart(
                    CartError::CartNotFound(_)
                        | CartError::ProductNotFound(_)
                        | CartError::AddressNotFound(_)
                        | CartError::CartItemNotFound(_)
                )
                | StorefrontError::Order(OrderError::NotFound(_))
        )
    }
}
