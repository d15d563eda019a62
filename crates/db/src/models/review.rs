//! Review entity model, DTOs, and the user join.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserResponse;

/// A user's review of a course. Immutable once created; at most one
/// review exists per (user, course) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    /// Integer rating in [1, 5].
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new review.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    pub user_id: DbId,
    pub course_id: DbId,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub comment: Option<String>,
}

/// A review joined with its author for read-side listings.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithUser {
    #[serde(flatten)]
    pub review: Review,
    pub user: UserResponse,
}
