//! Plain data: the entities owned by each actor, their creation/update payloads and the
//! pricing helpers shared by carts and orders.

pub mod address;
pub mod cart;
pub mod order;
pub mod pricing;
pub mod product;
pub mod user;

pub use address::*;
pub use cart::*;
pub use order::*;
pub use product::*;
pub use user::*;

/// Declares a `u32` newtype identifier that displays as `<prefix>_<n>`.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

resource_id!(
    /// Identifier of a registered user.
    UserId,
    "user"
);
resource_id!(
    /// Identifier of a catalog product.
    ProductId,
    "product"
);
resource_id!(
    /// Identifier of a delivery address.
    AddressId,
    "address"
);
resource_id!(
    /// Identifier of a shopping cart.
    CartId,
    "cart"
);
resource_id!(
    /// Identifier of a line inside one cart. Only unique within that cart.
    CartLineId,
    "line"
);
resource_id!(
    /// Identifier of a placed order.
    OrderId,
    "order"
);
