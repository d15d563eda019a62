//! Lesson entity model and DTOs.

use learnhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One lesson inside a course.
#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub course_id: DbId,
    /// Duration in minutes.
    pub duration: i32,
    /// Sequence position within the course. Listing sorts by this value
    /// ascending; the sort is stable, so equal orders fall back to
    /// insertion order.
    pub order: i32,
}

/// DTO for creating a new lesson.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLesson {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub course_id: DbId,
    /// Defaults to 0.
    pub duration: Option<i32>,
    /// Defaults to 0.
    pub order: Option<i32>,
}

/// DTO for patching a lesson. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLesson {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub duration: Option<i32>,
    pub order: Option<i32>,
}
