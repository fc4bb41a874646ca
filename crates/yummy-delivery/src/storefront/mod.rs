//! # Storefront
//!
//! The operations a customer-facing API exposes, resolved against the calling user.
//!
//! | Operation | Who |
//! |---|---|
//! | `register_user`, `products` | anyone |
//! | `add_to_cart`, `remove_cart_item`, `cart` | authenticated |
//! | `place_order`, `orders` | authenticated |
//! | `add_address`, `addresses`, `update_address`, `remove_address` | authenticated |
//! | `add_product`, `update_product` | administrators |
//!
//! Cart operations always target the caller's own cart, looked up from the user record.

pub mod error;
pub mod page;

pub use error::*;
pub use page::*;

use crate::auth::Authenticator;
use crate::clients::{AddressClient, CartClient, OrderClient, ProductClient, UserClient};
use crate::model::{
    Address, AddressDetails, AddressId, Cart, CartId, CartLine, CartLineId, Order, Product,
    ProductCreate, ProductId, ProductQuery, ProductUpdate, User, UserCreate, UserId,
};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct Storefront {
    users: UserClient,
    products: ProductClient,
    addresses: AddressClient,
    carts: CartClient,
    orders: OrderClient,
    orders_page_size: usize,
}

impl Storefront {
    pub fn new(
        users: UserClient,
        products: ProductClient,
        addresses: AddressClient,
        carts: CartClient,
        orders: OrderClient,
        orders_page_size: usize,
    ) -> Self {
        Self {
            users,
            products,
            addresses,
            carts,
            orders,
            orders_page_size,
        }
    }

    // =========================================================================
    // Accounts & catalog
    // =========================================================================

    /// Creates the user together with an empty cart.
    #[instrument(skip(self, params))]
    pub async fn register_user(&self, params: UserCreate) -> Result<User, StorefrontError> {
        let id = self.users.create_user(params).await?;
        info!(user_id = %id, "User registered");
        Ok(self.users.find(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn products(&self, query: ProductQuery) -> Result<Vec<Product>, StorefrontError> {
        Ok(self.products.catalog(query).await?)
    }

    #[instrument(skip(self, auth, params))]
    pub async fn add_product(
        &self,
        auth: &impl Authenticator,
        params: ProductCreate,
    ) -> Result<Product, StorefrontError> {
        require_admin(auth)?;
        let id = self.products.create_product(params).await?;
        Ok(self.products.lookup(id).await?)
    }

    #[instrument(skip(self, auth, update))]
    pub async fn update_product(
        &self,
        auth: &impl Authenticator,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, StorefrontError> {
        require_admin(auth)?;
        Ok(self.products.update_product(id, update).await?)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of the product to the caller's cart and returns the touched line.
    #[instrument(skip(self, auth))]
    pub async fn add_to_cart(
        &self,
        auth: &impl Authenticator,
        product_id: ProductId,
    ) -> Result<CartLine, StorefrontError> {
        let (_, cart_id) = self.own_cart(auth).await?;
        Ok(self.carts.add_item(cart_id, product_id).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn remove_cart_item(
        &self,
        auth: &impl Authenticator,
        line_id: CartLineId,
    ) -> Result<(), StorefrontError> {
        let (_, cart_id) = self.own_cart(auth).await?;
        self.carts.remove_item(cart_id, line_id).await?;
        Ok(())
    }

    #[instrument(skip(self, auth))]
    pub async fn cart(&self, auth: &impl Authenticator) -> Result<Cart, StorefrontError> {
        let (_, cart_id) = self.own_cart(auth).await?;
        Ok(self.carts.cart(cart_id).await?)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Checks the caller's cart out to one of the caller's addresses.
    #[instrument(skip(self, auth))]
    pub async fn place_order(
        &self,
        auth: &impl Authenticator,
        address_id: AddressId,
    ) -> Result<Order, StorefrontError> {
        let (user_id, cart_id) = self.own_cart(auth).await?;
        let order = self.carts.checkout(cart_id, address_id).await?;
        info!(%user_id, order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// The caller's order history, newest first. `page` is 1-based; 0 is the first page.
    #[instrument(skip(self, auth))]
    pub async fn orders(
        &self,
        auth: &impl Authenticator,
        page: usize,
    ) -> Result<Page<Order>, StorefrontError> {
        let user_id = require_user(auth)?;
        let history = self.orders.placed_by(user_id).await?;
        Ok(Page::of(history, page, self.orders_page_size))
    }

    // =========================================================================
    // Address book
    // =========================================================================

    #[instrument(skip(self, auth, details))]
    pub async fn add_address(
        &self,
        auth: &impl Authenticator,
        details: AddressDetails,
    ) -> Result<Address, StorefrontError> {
        let user_id = require_user(auth)?;
        let id = self.addresses.add_address(user_id, details).await?;
        Ok(self.addresses.resolve(id, user_id).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn addresses(&self, auth: &impl Authenticator) -> Result<Vec<Address>, StorefrontError> {
        let user_id = require_user(auth)?;
        Ok(self.addresses.list_for(user_id).await?)
    }

    /// Placed orders keep the address they were delivered to.
    #[instrument(skip(self, auth, details))]
    pub async fn update_address(
        &self,
        auth: &impl Authenticator,
        id: AddressId,
        details: AddressDetails,
    ) -> Result<Address, StorefrontError> {
        let user_id = require_user(auth)?;
        Ok(self.addresses.update(id, user_id, details).await?)
    }

    #[instrument(skip(self, auth))]
    pub async fn remove_address(
        &self,
        auth: &impl Authenticator,
        id: AddressId,
    ) -> Result<(), StorefrontError> {
        let user_id = require_user(auth)?;
        Ok(self.addresses.remove(id, user_id).await?)
    }

    async fn own_cart(&self, auth: &impl Authenticator) -> Result<(UserId, CartId), StorefrontError> {
        let user_id = require_user(auth)?;
        let cart_id = self.users.cart_of(user_id).await?;
        Ok((user_id, cart_id))
    }
}

fn require_user(auth: &impl Authenticator) -> Result<UserId, StorefrontError> {
    if !auth.is_authenticated() {
        return Err(StorefrontError::Unauthenticated);
    }
    auth.current_user_id().ok_or(StorefrontError::Unauthenticated)
}

fn require_admin(auth: &impl Authenticator) -> Result<UserId, StorefrontError> {
    let user_id = require_user(auth)?;
    if auth.is_admin() {
        Ok(user_id)
    } else {
        Err(StorefrontError::Forbidden)
    }
}
