//! Course entity model, DTOs, and the catalog filter.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::CourseLevel;

/// A catalog course.
#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// Required list price, >= 0.
    pub price: f64,
    /// Effective when present and lower than `price`.
    pub discount_price: Option<f64>,
    pub thumbnail: Option<String>,
    /// Owning instructor (User reference).
    pub instructor_id: DbId,
    /// Owning category, if any.
    pub category_id: Option<DbId>,
    /// Derived: unrounded mean of this course's review ratings.
    pub rating: f64,
    /// Derived: number of reviews for this course.
    pub review_count: i32,
    pub lesson_count: i32,
    /// Total duration in minutes.
    pub duration: i32,
    pub level: CourseLevel,
    pub is_featured: bool,
    pub is_bestseller: bool,
    pub is_new: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub slug: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub discount_price: Option<f64>,
    pub thumbnail: Option<String>,
    pub instructor_id: DbId,
    pub category_id: Option<DbId>,
    /// Advertised lesson count; the stored value is also bumped by each
    /// lesson-create. Defaults to 0.
    pub lesson_count: Option<i32>,
    /// Total duration in minutes. Defaults to 0.
    pub duration: Option<i32>,
    /// Defaults to `beginner` if omitted.
    pub level: Option<CourseLevel>,
    pub is_featured: Option<bool>,
    pub is_bestseller: Option<bool>,
    pub is_new: Option<bool>,
}

/// DTO for patching a course. All fields are optional; `rating` and
/// `review_count` are derived and only move through the aggregation
/// path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub discount_price: Option<f64>,
    pub thumbnail: Option<String>,
    pub category_id: Option<DbId>,
    pub duration: Option<i32>,
    pub level: Option<CourseLevel>,
    pub is_featured: Option<bool>,
    pub is_bestseller: Option<bool>,
    pub is_new: Option<bool>,
}

/// Filters for the catalog listing. All present filters are ANDed;
/// absent filters impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    /// Exact category match.
    pub category_id: Option<DbId>,
    /// Case-insensitive substring match against title OR description.
    pub search: Option<String>,
    /// Inclusive lower bound on the effective price.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on the effective price.
    pub max_price: Option<f64>,
    /// Exact difficulty level match.
    pub level: Option<CourseLevel>,
}
