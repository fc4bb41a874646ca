use super::{AddressId, UserId};
use serde::{Deserialize, Serialize};

/// A delivery address in a user's address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub owner: UserId,
    pub city: String,
    pub street_name: String,
    pub street_number: String,
    pub phone_number: String,
}

/// The user-supplied part of an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetails {
    pub city: String,
    pub street_name: String,
    pub street_number: String,
    pub phone_number: String,
}

#[derive(Debug, Clone)]
pub struct AddressCreate {
    pub owner: UserId,
    pub details: AddressDetails,
}

/// Replaces every user-supplied field. Only the owner may apply it.
#[derive(Debug, Clone)]
pub struct AddressUpdate {
    pub owner: UserId,
    pub details: AddressDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressQuery {
    OwnedBy(UserId),
}
