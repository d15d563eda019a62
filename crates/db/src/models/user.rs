//! User entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role assigned to every newly created user.
pub const DEFAULT_ROLE: &str = "student";

/// Full user record.
///
/// Contains the password credential -- NEVER serialize this to external
/// output directly. Use [`UserResponse`] for anything user-facing,
/// including the review join.
#[derive(Debug, Clone)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    /// Role tag, e.g. `"student"` or `"instructor"`.
    pub role: String,
    pub bio: Option<String>,
    pub created_at: Timestamp,
}

/// Safe user representation for external output (no password).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub role: String,
    pub bio: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            avatar: user.avatar,
            role: user.role,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// DTO for patching a user's profile. All fields are optional; the id
/// and username are immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(email)]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub role: Option<String>,
}
