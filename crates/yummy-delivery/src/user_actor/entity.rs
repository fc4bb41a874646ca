use super::UserError;
use crate::clients::CartClient;
use crate::model::{User, UserCreate, UserId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Query = ();
    type Context = CartClient;
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(UserError::InvalidName);
        }
        if !looks_like_email(&params.email) {
            return Err(UserError::InvalidEmail(params.email));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            admin: params.admin,
            cart_id: None,
        })
    }

    /// Opens the user's cart. If the cart actor refuses, the user is not stored.
    async fn on_create(&mut self, carts: &CartClient) -> Result<(), Self::Error> {
        let cart_id = carts
            .open_cart(self.id)
            .await
            .map_err(|e| UserError::CartUnavailable(e.to_string()))?;
        debug!(user_id = %self.id, %cart_id, "Cart opened");
        self.cart_id = Some(cart_id);
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _: &CartClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _: &CartClient) -> Result<(), Self::Error> {
        match action {}
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}
