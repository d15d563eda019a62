//! Enrollment progress aggregation.

use learnhub_core::error::CoreError;
use learnhub_core::progress::{progress_percent, MAX_PROGRESS};
use learnhub_core::types::DbId;
use learnhub_db::models::enrollment::Enrollment;
use learnhub_db::repositories::{EnrollmentRepo, LessonRepo};
use learnhub_db::Store;

/// Record a completed lesson and recompute the enrollment's progress
/// from the completed-lesson set.
///
/// Progress is `min(100, round(100 * |set| / total lessons))`. Reaching
/// 100 transitions the enrollment to `completed` and stamps
/// `completed_at` the first time. A course with zero lessons is
/// `NotFound` and leaves the enrollment untouched (progress stays 0).
pub fn recompute_enrollment_progress(
    store: &mut Store,
    enrollment_id: DbId,
    lesson_id: DbId,
) -> Result<Enrollment, CoreError> {
    let enrollment =
        EnrollmentRepo::find_by_id(store, enrollment_id).ok_or(CoreError::NotFound {
            entity: "Enrollment",
            id: enrollment_id,
        })?;

    let total = LessonRepo::count_by_course(store, enrollment.course_id);
    if total == 0 {
        return Err(CoreError::NotFound {
            entity: "Lessons for course",
            id: enrollment.course_id,
        });
    }

    let enrollment = EnrollmentRepo::record_completed_lesson(store, enrollment_id, lesson_id)?;
    let percent = progress_percent(enrollment.completed_lessons.len(), total);
    let enrollment = EnrollmentRepo::set_progress(store, enrollment_id, percent)?;

    if percent == MAX_PROGRESS {
        return EnrollmentRepo::complete(store, enrollment_id);
    }
    Ok(enrollment)
}
