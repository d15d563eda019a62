//! The authenticated caller of an ownership-checked operation.

use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;

/// Authenticated user identity supplied by the (out-of-scope)
/// auth/session layer.
///
/// Operations that mutate owned resources (enroll, lesson completion,
/// review creation, checkout) take an `Actor` so the precondition "an
/// authenticated user exists" is checked exactly once, at the edge.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// The caller's user id.
    pub user_id: DbId,
}

impl Actor {
    /// Build an actor from the session's user id, if any.
    ///
    /// A missing id is a precondition failure (`Unauthorized`), not an
    /// internal error.
    pub fn from_session(user_id: Option<DbId>) -> Result<Self, CoreError> {
        user_id
            .map(|user_id| Self { user_id })
            .ok_or_else(|| CoreError::Unauthorized("No authenticated user supplied".to_string()))
    }
}
