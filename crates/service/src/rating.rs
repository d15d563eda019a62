//! Course rating aggregation.

use learnhub_core::error::CoreError;
use learnhub_core::rating::rating_mean;
use learnhub_core::types::DbId;
use learnhub_db::models::course::Course;
use learnhub_db::repositories::{CourseRepo, ReviewRepo};
use learnhub_db::Store;

/// Recompute a course's `rating` and `review_count` from its current
/// review set.
///
/// Full recomputation, not an incremental patch: with no reviews the
/// fields reset to 0/0, otherwise rating is the unrounded mean.
/// Idempotent; review creation invokes this synchronously before
/// returning, so a subsequent course read reflects the new review.
pub fn recompute_course_rating(store: &mut Store, course_id: DbId) -> Result<Course, CoreError> {
    let ratings: Vec<i32> = ReviewRepo::list_by_course(store, course_id)
        .iter()
        .map(|r| r.rating)
        .collect();
    CourseRepo::set_rating(store, course_id, rating_mean(&ratings), ratings.len() as i32)
}
