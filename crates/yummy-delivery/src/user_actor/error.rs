use crate::model::UserId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Invalid user name: must not be blank")]
    InvalidName,

    #[error("Invalid email {0:?}")]
    InvalidEmail(String),

    #[error("User {0} has no cart")]
    NoCart(UserId),

    #[error("Could not open cart: {0}")]
    CartUnavailable(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
