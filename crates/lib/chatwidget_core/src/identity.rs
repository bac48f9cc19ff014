//! Identity seam: supplies the user id attached to each request.

use crate::models::UserId;

/// Source of the current user's id, consulted once per submission.
pub trait UserIdentity {
    fn user_id(&self) -> UserId;
}

/// Always answers with the same id. Stands in until a session layer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedUserId(pub UserId);

impl Default for FixedUserId {
    fn default() -> Self {
        Self(UserId(1))
    }
}

impl UserIdentity for FixedUserId {
    fn user_id(&self) -> UserId {
        self.0
    }
}

impl<F: Fn() -> UserId> UserIdentity for F {
    fn user_id(&self) -> UserId {
        self()
    }
}
