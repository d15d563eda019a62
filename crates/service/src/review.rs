//! Review creation with synchronous rating recomputation.

use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::review::{CreateReview, Review};
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, ReviewRepo};
use learnhub_db::Store;

use crate::actor::Actor;
use crate::rating::recompute_course_rating;

/// Create a review for a course the actor is enrolled in.
///
/// The course must exist (`NotFound`); the actor must hold an
/// enrollment for it (`Forbidden`); the rating must be in [1, 5]
/// (`Validation`); a second review for the same pair is `Conflict`.
/// The course's rating fields are recomputed before this returns.
pub fn create_review(
    store: &mut Store,
    actor: &Actor,
    course_id: DbId,
    rating: i32,
    comment: Option<String>,
) -> Result<Review, CoreError> {
    if CourseRepo::find_by_id(store, course_id).is_none() {
        return Err(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        });
    }
    if EnrollmentRepo::find_by_user_and_course(store, actor.user_id, course_id).is_none() {
        return Err(CoreError::Forbidden(
            "You must be enrolled to review this course".to_string(),
        ));
    }

    let review = ReviewRepo::create(
        store,
        &CreateReview {
            user_id: actor.user_id,
            course_id,
            rating,
            comment,
        },
    )?;

    let course = recompute_course_rating(store, course_id)?;
    tracing::info!(
        review_id = review.id,
        course_id,
        user_id = actor.user_id,
        rating,
        course_rating = course.rating,
        "Review created",
    );
    Ok(review)
}
