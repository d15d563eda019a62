//! Repository for catalog categories.

use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use validator::Validate;

use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::store::Store;

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category with `course_count` 0.
    ///
    /// Both the name and the slug must be globally unique.
    pub fn create(store: &mut Store, input: &CreateCategory) -> Result<Category, CoreError> {
        input.validate()?;

        if store.categories.iter().any(|c| c.name == input.name) {
            return Err(CoreError::Conflict(format!(
                "Category name '{}' already exists",
                input.name
            )));
        }
        if store.categories.iter().any(|c| c.slug == input.slug) {
            return Err(CoreError::Conflict(format!(
                "Category slug '{}' already exists",
                input.slug
            )));
        }

        let id = store.categories.alloc_id();
        let category = Category {
            id,
            name: input.name.clone(),
            slug: input.slug.clone(),
            description: input.description.clone(),
            icon: input.icon.clone(),
            course_count: 0,
        };
        store.categories.insert(id, category.clone());
        Ok(category)
    }

    /// Find a category by internal id.
    pub fn find_by_id(store: &Store, id: DbId) -> Option<Category> {
        store.categories.get(id).cloned()
    }

    /// Find a category by slug.
    pub fn find_by_slug(store: &Store, slug: &str) -> Option<Category> {
        store.categories.iter().find(|c| c.slug == slug).cloned()
    }

    /// All categories in insertion order.
    pub fn list(store: &Store) -> Vec<Category> {
        store.categories.iter().cloned().collect()
    }

    /// Patch a category. Only `Some` fields in `input` are applied;
    /// name/slug uniqueness is re-checked against other categories.
    pub fn update(
        store: &mut Store,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Category, CoreError> {
        if let Some(name) = &input.name {
            if store
                .categories
                .iter()
                .any(|c| c.id != id && c.name == *name)
            {
                return Err(CoreError::Conflict(format!(
                    "Category name '{name}' already exists"
                )));
            }
        }
        if let Some(slug) = &input.slug {
            if store
                .categories
                .iter()
                .any(|c| c.id != id && c.slug == *slug)
            {
                return Err(CoreError::Conflict(format!(
                    "Category slug '{slug}' already exists"
                )));
            }
        }

        let category = store.categories.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Category",
            id,
        })?;

        if let Some(name) = &input.name {
            category.name = name.clone();
        }
        if let Some(slug) = &input.slug {
            category.slug = slug.clone();
        }
        if let Some(description) = &input.description {
            category.description = Some(description.clone());
        }
        if let Some(icon) = &input.icon {
            category.icon = Some(icon.clone());
        }

        Ok(category.clone())
    }
}
