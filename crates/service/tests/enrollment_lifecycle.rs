//! Integration tests for the enrollment lifecycle.
//!
//! Covers enroll-once semantics, per-lesson completion with progress
//! derivation and deduplication, the completion transition, the
//! direct progress override, and the authorization check.

use assert_matches::assert_matches;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use learnhub_db::models::course::CreateCourse;
use learnhub_db::models::lesson::CreateLesson;
use learnhub_db::models::status::EnrollmentStatus;
use learnhub_db::models::user::CreateUser;
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, LessonRepo, UserRepo};
use learnhub_db::Store;
use learnhub_service::actor::Actor;
use learnhub_service::enrollment::{complete_lesson, enroll, set_progress};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password: "password123".to_string(),
        email: None,
        first_name: None,
        last_name: None,
    }
}

fn new_course(instructor_id: DbId, slug: &str) -> CreateCourse {
    CreateCourse {
        title: format!("Course {slug}"),
        slug: slug.to_string(),
        description: None,
        price: 89.99,
        discount_price: None,
        thumbnail: None,
        instructor_id,
        category_id: None,
        lesson_count: None,
        duration: None,
        level: None,
        is_featured: None,
        is_bestseller: None,
        is_new: None,
    }
}

/// Store with one instructor, one student, and one course; returns
/// `(store, student_id, course_id)`.
fn seed(lesson_count: usize) -> (Store, DbId, DbId) {
    let mut store = Store::new();
    let instructor = UserRepo::create(&mut store, &new_user("teacher")).unwrap();
    let student = UserRepo::create(&mut store, &new_user("student")).unwrap();
    let course = CourseRepo::create(&mut store, &new_course(instructor.id, "rust-101")).unwrap();

    for order in 1..=lesson_count {
        LessonRepo::create(
            &mut store,
            &CreateLesson {
                title: format!("Lesson {order}"),
                description: None,
                content: None,
                course_id: course.id,
                duration: Some(30),
                order: Some(order as i32),
            },
        )
        .unwrap();
    }

    (store, student.id, course.id)
}

fn lesson_ids(store: &Store, course_id: DbId) -> Vec<DbId> {
    LessonRepo::list_by_course(store, course_id)
        .iter()
        .map(|l| l.id)
        .collect()
}

// ---------------------------------------------------------------------------
// Enroll
// ---------------------------------------------------------------------------

#[test]
fn enroll_creates_active_enrollment_at_zero() {
    let (mut store, student_id, course_id) = seed(5);

    assert!(EnrollmentRepo::find_by_user_and_course(&store, student_id, course_id).is_none());

    let enrollment = enroll(&mut store, student_id, course_id).unwrap();
    assert_eq!(enrollment.status, EnrollmentStatus::Active);
    assert_eq!(enrollment.progress, 0);
    assert!(enrollment.completed_lessons.is_empty());
    assert_eq!(enrollment.completed_at, None);

    let found = EnrollmentRepo::find_by_user_and_course(&store, student_id, course_id).unwrap();
    assert_eq!(found.id, enrollment.id);
}

#[test]
fn second_enroll_is_conflict_without_duplicate_state() {
    let (mut store, student_id, course_id) = seed(5);

    enroll(&mut store, student_id, course_id).unwrap();
    let err = enroll(&mut store, student_id, course_id).unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));

    assert_eq!(EnrollmentRepo::list_by_user(&store, student_id).len(), 1);
}

#[test]
fn enroll_in_missing_course_is_not_found() {
    let (mut store, student_id, _) = seed(0);
    let err = enroll(&mut store, student_id, 99).unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Course", id: 99 });
}

// ---------------------------------------------------------------------------
// Per-lesson completion
// ---------------------------------------------------------------------------

#[test]
fn completing_lessons_derives_progress_and_completes() {
    let (mut store, student_id, course_id) = seed(5);
    let actor = Actor { user_id: student_id };
    let enrollment = enroll(&mut store, student_id, course_id).unwrap();
    let lessons = lesson_ids(&store, course_id);

    // Lessons 1-3: round(100 * 3/5) = 60.
    for lesson_id in &lessons[..3] {
        complete_lesson(&mut store, &actor, enrollment.id, course_id, *lesson_id).unwrap();
    }
    let current = EnrollmentRepo::find_by_id(&store, enrollment.id).unwrap();
    assert_eq!(current.progress, 60);
    assert_eq!(current.status, EnrollmentStatus::Active);

    // Completing lesson 3 again deduplicates.
    let current =
        complete_lesson(&mut store, &actor, enrollment.id, course_id, lessons[2]).unwrap();
    assert_eq!(current.progress, 60);
    assert_eq!(current.completed_lessons.len(), 3);

    // Lessons 4 and 5 finish the course.
    complete_lesson(&mut store, &actor, enrollment.id, course_id, lessons[3]).unwrap();
    let finished =
        complete_lesson(&mut store, &actor, enrollment.id, course_id, lessons[4]).unwrap();
    assert_eq!(finished.progress, 100);
    assert_eq!(finished.status, EnrollmentStatus::Completed);
    assert!(finished.completed_at.is_some());
}

#[test]
fn completed_at_is_stamped_once() {
    let (mut store, student_id, course_id) = seed(1);
    let actor = Actor { user_id: student_id };
    let enrollment = enroll(&mut store, student_id, course_id).unwrap();
    let lessons = lesson_ids(&store, course_id);

    let first =
        complete_lesson(&mut store, &actor, enrollment.id, course_id, lessons[0]).unwrap();
    let second =
        complete_lesson(&mut store, &actor, enrollment.id, course_id, lessons[0]).unwrap();
    assert_eq!(first.completed_at, second.completed_at);
}

#[test]
fn wrong_actor_is_forbidden() {
    let (mut store, student_id, course_id) = seed(5);
    let other = UserRepo::create(
        &mut store,
        &CreateUser {
            username: "other".to_string(),
            password: "password123".to_string(),
            email: None,
            first_name: None,
            last_name: None,
        },
    )
    .unwrap();

    let enrollment = enroll(&mut store, student_id, course_id).unwrap();
    let lessons = lesson_ids(&store, course_id);

    // `other` has no enrollment for the course at all.
    let err = complete_lesson(
        &mut store,
        &Actor { user_id: other.id },
        enrollment.id,
        course_id,
        lessons[0],
    )
    .unwrap_err();
    assert_matches!(err, CoreError::Forbidden(_));

    // `other` enrolled, but names the student's enrollment id.
    enroll(&mut store, other.id, course_id).unwrap();
    let err = complete_lesson(
        &mut store,
        &Actor { user_id: other.id },
        enrollment.id,
        course_id,
        lessons[0],
    )
    .unwrap_err();
    assert_matches!(err, CoreError::Forbidden(_));
}

#[test]
fn course_without_lessons_is_not_found_and_progress_stays_zero() {
    let (mut store, student_id, course_id) = seed(0);
    let actor = Actor { user_id: student_id };
    let enrollment = enroll(&mut store, student_id, course_id).unwrap();

    let err = complete_lesson(&mut store, &actor, enrollment.id, course_id, 1).unwrap_err();
    assert_matches!(err, CoreError::NotFound { .. });

    let current = EnrollmentRepo::find_by_id(&store, enrollment.id).unwrap();
    assert_eq!(current.progress, 0);
    assert!(current.completed_lessons.is_empty());
}

// ---------------------------------------------------------------------------
// Direct override
// ---------------------------------------------------------------------------

#[test]
fn set_progress_overrides_and_completes_at_one_hundred() {
    let (mut store, student_id, course_id) = seed(5);
    let enrollment = enroll(&mut store, student_id, course_id).unwrap();

    let halfway = set_progress(&mut store, enrollment.id, 50, None).unwrap();
    assert_eq!(halfway.progress, 50);
    assert_eq!(halfway.status, EnrollmentStatus::Active);
    assert_eq!(halfway.completed_at, None);

    let done = set_progress(&mut store, enrollment.id, 100, None).unwrap();
    assert_eq!(done.progress, 100);
    assert_eq!(done.status, EnrollmentStatus::Completed);
    assert!(done.completed_at.is_some());
}

#[test]
fn set_progress_records_supplied_lesson() {
    let (mut store, student_id, course_id) = seed(5);
    let enrollment = enroll(&mut store, student_id, course_id).unwrap();
    let lessons = lesson_ids(&store, course_id);

    let updated = set_progress(&mut store, enrollment.id, 20, Some(lessons[0])).unwrap();
    assert!(updated.completed_lessons.contains(&lessons[0]));
}

#[test]
fn set_progress_rejects_out_of_range_values() {
    let (mut store, student_id, course_id) = seed(5);
    let enrollment = enroll(&mut store, student_id, course_id).unwrap();

    assert_matches!(
        set_progress(&mut store, enrollment.id, -1, None).unwrap_err(),
        CoreError::Validation(_)
    );
    assert_matches!(
        set_progress(&mut store, enrollment.id, 101, None).unwrap_err(),
        CoreError::Validation(_)
    );
}

#[test]
fn set_progress_on_missing_enrollment_is_not_found() {
    let (mut store, _, _) = seed(0);
    let err = set_progress(&mut store, 42, 10, None).unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Enrollment", id: 42 });
}
