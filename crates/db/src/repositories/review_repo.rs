//! Repository for reviews, including the author join.

use chrono::Utc;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use validator::Validate;

use crate::models::review::{CreateReview, Review, ReviewWithUser};
use crate::store::Store;

/// Provides create and query operations for reviews. Reviews are
/// immutable once created; there is no update path.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created record.
    ///
    /// Review creation is idempotent-by-rejection: a second create for
    /// the same (user, course) pair surfaces `Conflict`. The user and
    /// course must both exist and the rating must be in [1, 5].
    pub fn create(store: &mut Store, input: &CreateReview) -> Result<Review, CoreError> {
        input.validate()?;

        if store.users.get(input.user_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "User",
                id: input.user_id,
            });
        }
        if store.courses.get(input.course_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Course",
                id: input.course_id,
            });
        }
        if Self::find_by_user_and_course(store, input.user_id, input.course_id).is_some() {
            return Err(CoreError::Conflict(format!(
                "User {} has already reviewed course {}",
                input.user_id, input.course_id
            )));
        }

        let id = store.reviews.alloc_id();
        let review = Review {
            id,
            user_id: input.user_id,
            course_id: input.course_id,
            rating: input.rating,
            comment: input.comment.clone(),
            created_at: Utc::now(),
        };
        store.reviews.insert(id, review.clone());
        Ok(review)
    }

    /// Find a review by internal id.
    pub fn find_by_id(store: &Store, id: DbId) -> Option<Review> {
        store.reviews.get(id).cloned()
    }

    /// Point lookup by the (user, course) composite key.
    pub fn find_by_user_and_course(
        store: &Store,
        user_id: DbId,
        course_id: DbId,
    ) -> Option<Review> {
        store
            .reviews
            .iter()
            .find(|r| r.user_id == user_id && r.course_id == course_id)
            .cloned()
    }

    /// All reviews of a course, in insertion order.
    pub fn list_by_course(store: &Store, course_id: DbId) -> Vec<Review> {
        store
            .reviews
            .iter()
            .filter(|r| r.course_id == course_id)
            .cloned()
            .collect()
    }

    /// A course's reviews joined with their authors (safe user
    /// representation, no credential).
    ///
    /// A dangling user reference is `Inconsistent`: no delete path
    /// exists, so it cannot happen without a bug.
    pub fn list_by_course_with_users(
        store: &Store,
        course_id: DbId,
    ) -> Result<Vec<ReviewWithUser>, CoreError> {
        Self::list_by_course(store, course_id)
            .into_iter()
            .map(|review| {
                let user = store
                    .users
                    .get(review.user_id)
                    .cloned()
                    .ok_or(CoreError::Inconsistent {
                        entity: "User",
                        id: review.user_id,
                    })?;
                Ok(ReviewWithUser {
                    review,
                    user: user.into(),
                })
            })
            .collect()
    }
}
