//! Caller identity as seen by the storefront.
//!
//! Token handling lives outside this crate; whatever validates the request hands the storefront
//! something implementing [`Authenticator`].

use crate::model::UserId;

pub trait Authenticator: Send + Sync {
    /// The calling user, if any.
    fn current_user_id(&self) -> Option<UserId>;

    fn is_authenticated(&self) -> bool {
        self.current_user_id().is_some()
    }

    fn is_admin(&self) -> bool;
}

/// An already-validated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<UserId>,
    admin: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(id: UserId) -> Self {
        Self {
            user: Some(id),
            admin: false,
        }
    }

    pub fn admin(id: UserId) -> Self {
        Self {
            user: Some(id),
            admin: true,
        }
    }
}

impl Authenticator for Session {
    fn current_user_id(&self) -> Option<UserId> {
        self.user
    }

    fn is_admin(&self) -> bool {
        self.admin
    }
}
