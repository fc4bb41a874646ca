use super::{CartId, UserId};
use serde::{Deserialize, Serialize};

/// A registered customer (or administrator).
///
/// `cart_id` is filled in by the user actor's `on_create` hook, so every stored user has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub admin: bool,
    pub cart_id: Option<CartId>,
}

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub admin: bool,
}
