//! Repository for enrollments, including the course join.

use chrono::Utc;
use learnhub_core::error::CoreError;
use learnhub_core::progress::{validate_progress, MAX_PROGRESS};
use learnhub_core::types::DbId;

use crate::models::enrollment::{CreateEnrollment, Enrollment, EnrollmentWithCourse};
use crate::models::status::EnrollmentStatus;
use crate::store::Store;

/// Provides CRUD operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment at progress 0 with an empty completed set.
    ///
    /// Enrollment is idempotent-by-rejection: a second create for the
    /// same (user, course) pair surfaces `Conflict` instead of
    /// duplicating state. The user and course must both exist.
    pub fn create(store: &mut Store, input: &CreateEnrollment) -> Result<Enrollment, CoreError> {
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
                "User {} is already enrolled in course {}",
                input.user_id, input.course_id
            )));
        }

        let id = store.enrollments.alloc_id();
        let enrollment = Enrollment {
            id,
            user_id: input.user_id,
            course_id: input.course_id,
            status: EnrollmentStatus::Active,
            progress: 0,
            completed_lessons: Default::default(),
            completed_at: None,
            created_at: Utc::now(),
        };
        store.enrollments.insert(id, enrollment.clone());
        Ok(enrollment)
    }

    /// Find an enrollment by internal id.
    pub fn find_by_id(store: &Store, id: DbId) -> Option<Enrollment> {
        store.enrollments.get(id).cloned()
    }

    /// Point lookup by the (user, course) composite key.
    pub fn find_by_user_and_course(
        store: &Store,
        user_id: DbId,
        course_id: DbId,
    ) -> Option<Enrollment> {
        store
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned()
    }

    /// All of a user's enrollments, in insertion order.
    pub fn list_by_user(store: &Store, user_id: DbId) -> Vec<Enrollment> {
        store
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }

    /// A user's enrollments joined with their courses.
    ///
    /// A dangling course reference is `Inconsistent`: no delete path
    /// exists, so it cannot happen without a bug.
    pub fn list_by_user_with_courses(
        store: &Store,
        user_id: DbId,
    ) -> Result<Vec<EnrollmentWithCourse>, CoreError> {
        Self::list_by_user(store, user_id)
            .into_iter()
            .map(|enrollment| {
                let course = store
                    .courses
                    .get(enrollment.course_id)
                    .cloned()
                    .ok_or(CoreError::Inconsistent {
                        entity: "Course",
                        id: enrollment.course_id,
                    })?;
                Ok(EnrollmentWithCourse { enrollment, course })
            })
            .collect()
    }

    /// Add a lesson to the completed set (duplicates collapse).
    pub fn record_completed_lesson(
        store: &mut Store,
        id: DbId,
        lesson_id: DbId,
    ) -> Result<Enrollment, CoreError> {
        let enrollment = store.enrollments.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Enrollment",
            id,
        })?;
        enrollment.completed_lessons.insert(lesson_id);
        Ok(enrollment.clone())
    }

    /// Set the stored progress percentage.
    pub fn set_progress(store: &mut Store, id: DbId, progress: i32) -> Result<Enrollment, CoreError> {
        validate_progress(progress)?;
        let enrollment = store.enrollments.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Enrollment",
            id,
        })?;
        enrollment.progress = progress;
        Ok(enrollment.clone())
    }

    /// Transition to `completed` at full progress, stamping
    /// `completed_at` the first time only.
    pub fn complete(store: &mut Store, id: DbId) -> Result<Enrollment, CoreError> {
        let enrollment = store.enrollments.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Enrollment",
            id,
        })?;
        enrollment.status = EnrollmentStatus::Completed;
        enrollment.progress = MAX_PROGRESS;
        if enrollment.completed_at.is_none() {
            enrollment.completed_at = Some(Utc::now());
        }
        Ok(enrollment.clone())
    }
}
