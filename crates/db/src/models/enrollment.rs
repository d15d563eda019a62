//! Enrollment entity model, DTOs, and the course join.

use std::collections::BTreeSet;

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use super::course::Course;
use super::status::EnrollmentStatus;

/// A user's participation in a course, including progress state.
///
/// At most one enrollment exists per (user, course) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub status: EnrollmentStatus,
    /// Derived: `round(100 * |completed_lessons| / total lessons)`,
    /// clamped to [0, 100]. The direct-override path may also set it.
    pub progress: i32,
    /// Lesson ids the user has completed, duplicates collapsed.
    pub completed_lessons: BTreeSet<DbId>,
    /// Set the first time progress reaches 100.
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a new enrollment. Enrollments always start
/// `active` at progress 0 with an empty completed set.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollment {
    pub user_id: DbId,
    pub course_id: DbId,
}

/// An enrollment joined with its course for read-side listings. The
/// base entities stay normalized; this type exists only as a query
/// result.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentWithCourse {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub course: Course,
}
