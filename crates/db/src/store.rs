//! The in-memory keyed collections backing every repository.

use indexmap::IndexMap;
use learnhub_core::types::DbId;

use crate::models::category::Category;
use crate::models::course::Course;
use crate::models::enrollment::Enrollment;
use crate::models::lesson::Lesson;
use crate::models::payment::Payment;
use crate::models::review::Review;
use crate::models::user::User;

/// One keyed collection plus its id counter.
///
/// Iteration order is insertion order (`IndexMap`), which is the only
/// ordering guarantee the store gives. Ids start at 1 and are never
/// reused; no delete path exists.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: IndexMap<DbId, T>,
    next_id: DbId,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Claim the next id. The caller must insert under exactly this id.
    pub(crate) fn alloc_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn insert(&mut self, id: DbId, row: T) {
        self.rows.insert(id, row);
    }

    pub(crate) fn get(&self, id: DbId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: DbId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Rows in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-local entity store.
///
/// Owns every collection; it is passed `&`/`&mut` into each repository
/// call so the borrow checker enforces the single-writer execution
/// model. Construct one per test for isolation.
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) users: Table<User>,
    pub(crate) categories: Table<Category>,
    pub(crate) courses: Table<Course>,
    pub(crate) lessons: Table<Lesson>,
    pub(crate) enrollments: Table<Enrollment>,
    pub(crate) payments: Table<Payment>,
    pub(crate) reviews: Table<Review>,
}

impl Store {
    /// An empty store with all id counters at 1.
    pub fn new() -> Self {
        Self::default()
    }
}
