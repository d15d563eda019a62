//! Enrollment lifecycle: enroll, per-lesson completion, and the direct
//! progress override.

use learnhub_core::error::CoreError;
use learnhub_core::progress::{validate_progress, MAX_PROGRESS};
use learnhub_core::types::DbId;
use learnhub_db::models::enrollment::{CreateEnrollment, Enrollment};
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo};
use learnhub_db::Store;

use crate::actor::Actor;
use crate::progress::recompute_enrollment_progress;

/// Enroll a user in a course.
///
/// Fails with `Conflict` if an enrollment already exists for the pair
/// and `NotFound` if the course does not exist; repeated calls are
/// therefore retry-safe. `user_id` comes from the auth layer or, on the
/// payment path, from the pending payment's metadata.
pub fn enroll(store: &mut Store, user_id: DbId, course_id: DbId) -> Result<Enrollment, CoreError> {
    let enrollment = EnrollmentRepo::create(store, &CreateEnrollment { user_id, course_id })?;
    tracing::info!(
        enrollment_id = enrollment.id,
        user_id,
        course_id,
        "User enrolled in course",
    );
    Ok(enrollment)
}

/// Mark a lesson completed on the caller's own enrollment.
///
/// The actor's enrollment for `course_id` must be the one named by
/// `enrollment_id` (`Forbidden` otherwise); the course must exist and
/// have lessons (`NotFound` otherwise). Progress derivation is
/// delegated to the aggregation path.
pub fn complete_lesson(
    store: &mut Store,
    actor: &Actor,
    enrollment_id: DbId,
    course_id: DbId,
    lesson_id: DbId,
) -> Result<Enrollment, CoreError> {
    let owned = EnrollmentRepo::find_by_user_and_course(store, actor.user_id, course_id);
    match owned {
        Some(enrollment) if enrollment.id == enrollment_id => {}
        _ => {
            return Err(CoreError::Forbidden(
                "Not authorized to update this enrollment".to_string(),
            ));
        }
    }

    if CourseRepo::find_by_id(store, course_id).is_none() {
        return Err(CoreError::NotFound {
            entity: "Course",
            id: course_id,
        });
    }

    let enrollment = recompute_enrollment_progress(store, enrollment_id, lesson_id)?;
    tracing::info!(
        enrollment_id,
        user_id = actor.user_id,
        lesson_id,
        progress = enrollment.progress,
        "Lesson completed",
    );
    Ok(enrollment)
}

/// Directly override an enrollment's progress percentage.
///
/// A generic update path distinct from per-lesson completion; when a
/// lesson id is supplied it is also recorded in the completed set.
/// Setting 100 performs the completion transition.
pub fn set_progress(
    store: &mut Store,
    enrollment_id: DbId,
    progress: i32,
    lesson_id: Option<DbId>,
) -> Result<Enrollment, CoreError> {
    validate_progress(progress)?;

    if let Some(lesson_id) = lesson_id {
        EnrollmentRepo::record_completed_lesson(store, enrollment_id, lesson_id)?;
    }
    let enrollment = EnrollmentRepo::set_progress(store, enrollment_id, progress)?;

    if progress == MAX_PROGRESS {
        let enrollment = EnrollmentRepo::complete(store, enrollment_id)?;
        tracing::info!(enrollment_id, "Enrollment completed");
        return Ok(enrollment);
    }
    Ok(enrollment)
}
