//! Repository for lessons.

use chrono::Utc;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use validator::Validate;

use crate::models::lesson::{CreateLesson, Lesson, UpdateLesson};
use crate::store::Store;

/// Provides CRUD operations for lessons.
pub struct LessonRepo;

impl LessonRepo {
    /// Insert a new lesson, returning the created record.
    ///
    /// The owning course must exist; its `lesson_count` is incremented
    /// and its `updated_at` refreshed as a side effect of this call.
    pub fn create(store: &mut Store, input: &CreateLesson) -> Result<Lesson, CoreError> {
        input.validate()?;

        if store.courses.get(input.course_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Course",
                id: input.course_id,
            });
        }

        let id = store.lessons.alloc_id();
        let lesson = Lesson {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            content: input.content.clone(),
            course_id: input.course_id,
            duration: input.duration.unwrap_or(0),
            order: input.order.unwrap_or(0),
        };
        store.lessons.insert(id, lesson.clone());

        if let Some(course) = store.courses.get_mut(input.course_id) {
            course.lesson_count += 1;
            course.updated_at = Utc::now();
        }

        Ok(lesson)
    }

    /// Find a lesson by internal id.
    pub fn find_by_id(store: &Store, id: DbId) -> Option<Lesson> {
        store.lessons.get(id).cloned()
    }

    /// Lessons of a course sorted ascending by `order`. The sort is
    /// stable, so equal orders keep insertion order.
    pub fn list_by_course(store: &Store, course_id: DbId) -> Vec<Lesson> {
        let mut lessons: Vec<Lesson> = store
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .cloned()
            .collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    /// Number of lessons a course actually has (lesson entities, not the
    /// course's advertised `lesson_count`).
    pub fn count_by_course(store: &Store, course_id: DbId) -> usize {
        store
            .lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .count()
    }

    /// Patch a lesson. Only `Some` fields in `input` are applied.
    pub fn update(store: &mut Store, id: DbId, input: &UpdateLesson) -> Result<Lesson, CoreError> {
        let lesson = store.lessons.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Lesson",
            id,
        })?;

        if let Some(title) = &input.title {
            lesson.title = title.clone();
        }
        if let Some(description) = &input.description {
            lesson.description = Some(description.clone());
        }
        if let Some(content) = &input.content {
            lesson.content = Some(content.clone());
        }
        if let Some(duration) = input.duration {
            lesson.duration = duration;
        }
        if let Some(order) = input.order {
            lesson.order = order;
        }

        Ok(lesson.clone())
    }
}
