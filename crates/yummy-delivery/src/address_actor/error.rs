use crate::model::AddressId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AddressError {
    /// Unknown id, or an address that belongs to someone else.
    #[error("Address not found: {0}")]
    NotFound(AddressId),

    #[error("Invalid {field} {value:?}: expected 2 to 25 characters")]
    InvalidText { field: &'static str, value: String },

    #[error("Invalid street number: must not be blank")]
    MissingStreetNumber,

    #[error("Invalid phone number {0:?}")]
    InvalidPhone(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
