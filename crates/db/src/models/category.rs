//! Category entity model and DTOs.

use learnhub_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A catalog category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    /// Icon reference rendered by the (out-of-scope) UI.
    pub icon: Option<String>,
    /// Derived: number of course-create operations referencing this
    /// category. Increment-only; no course-delete path exists.
    pub course_count: i32,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// DTO for patching a category. All fields are optional; `course_count`
/// is derived and cannot be patched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}
