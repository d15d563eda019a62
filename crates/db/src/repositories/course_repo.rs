//! Repository for courses, including the catalog filter queries.

use chrono::Utc;
use learnhub_core::error::CoreError;
use learnhub_core::pricing::{effective_price, price_in_range};
use learnhub_core::types::DbId;
use validator::Validate;

use crate::models::course::{Course, CourseFilter, CreateCourse, UpdateCourse};
use crate::store::Store;

/// Provides CRUD and query operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created record.
    ///
    /// The slug must be globally unique and the instructor (and
    /// category, when given) must exist. Creating a course with a
    /// category increments that category's `course_count` as a side
    /// effect of this call.
    pub fn create(store: &mut Store, input: &CreateCourse) -> Result<Course, CoreError> {
        input.validate()?;

        if store.courses.iter().any(|c| c.slug == input.slug) {
            return Err(CoreError::Conflict(format!(
                "Course slug '{}' already exists",
                input.slug
            )));
        }
        if store.users.get(input.instructor_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "User",
                id: input.instructor_id,
            });
        }
        if let Some(category_id) = input.category_id {
            if store.categories.get(category_id).is_none() {
                return Err(CoreError::NotFound {
                    entity: "Category",
                    id: category_id,
                });
            }
        }

        let id = store.courses.alloc_id();
        let now = Utc::now();
        let course = Course {
            id,
            title: input.title.clone(),
            slug: input.slug.clone(),
            description: input.description.clone(),
            price: input.price,
            discount_price: input.discount_price,
            thumbnail: input.thumbnail.clone(),
            instructor_id: input.instructor_id,
            category_id: input.category_id,
            rating: 0.0,
            review_count: 0,
            lesson_count: input.lesson_count.unwrap_or(0),
            duration: input.duration.unwrap_or(0),
            level: input.level.unwrap_or_default(),
            is_featured: input.is_featured.unwrap_or(false),
            is_bestseller: input.is_bestseller.unwrap_or(false),
            is_new: input.is_new.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };
        store.courses.insert(id, course.clone());

        // Existence was checked above, so the increment cannot be missed.
        if let Some(category_id) = input.category_id {
            if let Some(category) = store.categories.get_mut(category_id) {
                category.course_count += 1;
            }
        }

        Ok(course)
    }

    /// Find a course by internal id.
    pub fn find_by_id(store: &Store, id: DbId) -> Option<Course> {
        store.courses.get(id).cloned()
    }

    /// Find a course by slug.
    pub fn find_by_slug(store: &Store, slug: &str) -> Option<Course> {
        store.courses.iter().find(|c| c.slug == slug).cloned()
    }

    /// Courses matching `filter`, in insertion order.
    pub fn list(store: &Store, filter: &CourseFilter) -> Vec<Course> {
        store
            .courses
            .iter()
            .filter(|course| Self::matches(course, filter))
            .cloned()
            .collect()
    }

    /// All featured courses, in insertion order.
    pub fn list_featured(store: &Store) -> Vec<Course> {
        store
            .courses
            .iter()
            .filter(|c| c.is_featured)
            .cloned()
            .collect()
    }

    /// All courses in a category, in insertion order.
    pub fn list_by_category(store: &Store, category_id: DbId) -> Vec<Course> {
        store
            .courses
            .iter()
            .filter(|c| c.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    /// All courses owned by an instructor, in insertion order.
    pub fn list_by_instructor(store: &Store, instructor_id: DbId) -> Vec<Course> {
        store
            .courses
            .iter()
            .filter(|c| c.instructor_id == instructor_id)
            .cloned()
            .collect()
    }

    /// Patch a course. Only `Some` fields in `input` are applied;
    /// `updated_at` is refreshed.
    pub fn update(store: &mut Store, id: DbId, input: &UpdateCourse) -> Result<Course, CoreError> {
        input.validate()?;

        if let Some(slug) = &input.slug {
            if store.courses.iter().any(|c| c.id != id && c.slug == *slug) {
                return Err(CoreError::Conflict(format!(
                    "Course slug '{slug}' already exists"
                )));
            }
        }
        if let Some(category_id) = input.category_id {
            if store.categories.get(category_id).is_none() {
                return Err(CoreError::NotFound {
                    entity: "Category",
                    id: category_id,
                });
            }
        }

        let course = store.courses.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Course",
            id,
        })?;

        if let Some(title) = &input.title {
            course.title = title.clone();
        }
        if let Some(slug) = &input.slug {
            course.slug = slug.clone();
        }
        if let Some(description) = &input.description {
            course.description = Some(description.clone());
        }
        if let Some(price) = input.price {
            course.price = price;
        }
        if let Some(discount_price) = input.discount_price {
            course.discount_price = Some(discount_price);
        }
        if let Some(thumbnail) = &input.thumbnail {
            course.thumbnail = Some(thumbnail.clone());
        }
        if let Some(category_id) = input.category_id {
            course.category_id = Some(category_id);
        }
        if let Some(duration) = input.duration {
            course.duration = duration;
        }
        if let Some(level) = input.level {
            course.level = level;
        }
        if let Some(is_featured) = input.is_featured {
            course.is_featured = is_featured;
        }
        if let Some(is_bestseller) = input.is_bestseller {
            course.is_bestseller = is_bestseller;
        }
        if let Some(is_new) = input.is_new {
            course.is_new = is_new;
        }
        course.updated_at = Utc::now();

        Ok(course.clone())
    }

    /// Overwrite the derived rating fields. Only the aggregation path
    /// calls this; `updated_at` is refreshed like any other write.
    pub fn set_rating(
        store: &mut Store,
        id: DbId,
        rating: f64,
        review_count: i32,
    ) -> Result<Course, CoreError> {
        let course = store.courses.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Course",
            id,
        })?;
        course.rating = rating;
        course.review_count = review_count;
        course.updated_at = Utc::now();
        Ok(course.clone())
    }

    fn matches(course: &Course, filter: &CourseFilter) -> bool {
        if let Some(category_id) = filter.category_id {
            if course.category_id != Some(category_id) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            let in_title = course.title.to_lowercase().contains(&needle);
            let in_description = course
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }
        if filter.min_price.is_some() || filter.max_price.is_some() {
            let price = effective_price(course.price, course.discount_price);
            if !price_in_range(price, filter.min_price, filter.max_price) {
                return false;
            }
        }
        if let Some(level) = filter.level {
            if course.level != level {
                return false;
            }
        }
        true
    }
}
