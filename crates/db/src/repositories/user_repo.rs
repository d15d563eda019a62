//! Repository for user records.

use chrono::Utc;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use validator::Validate;

use crate::models::user::{CreateUser, UpdateUser, User, DEFAULT_ROLE};
use crate::store::Store;

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created record.
    ///
    /// The username and email (when present) must be globally unique.
    pub fn create(store: &mut Store, input: &CreateUser) -> Result<User, CoreError> {
        input.validate()?;

        if store.users.iter().any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken",
                input.username
            )));
        }
        if let Some(email) = &input.email {
            if store
                .users
                .iter()
                .any(|u| u.email.as_deref() == Some(email.as_str()))
            {
                return Err(CoreError::Conflict(format!(
                    "Email '{email}' is already registered"
                )));
            }
        }

        let id = store.users.alloc_id();
        let user = User {
            id,
            username: input.username.clone(),
            password: input.password.clone(),
            email: input.email.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            avatar: None,
            role: DEFAULT_ROLE.to_string(),
            bio: None,
            created_at: Utc::now(),
        };
        store.users.insert(id, user.clone());
        Ok(user)
    }

    /// Find a user by internal id.
    pub fn find_by_id(store: &Store, id: DbId) -> Option<User> {
        store.users.get(id).cloned()
    }

    /// Find a user by username (case-sensitive).
    pub fn find_by_username(store: &Store, username: &str) -> Option<User> {
        store.users.iter().find(|u| u.username == username).cloned()
    }

    /// Patch a user's profile. Only `Some` fields in `input` are applied.
    pub fn update(store: &mut Store, id: DbId, input: &UpdateUser) -> Result<User, CoreError> {
        input.validate()?;

        if let Some(email) = &input.email {
            if store
                .users
                .iter()
                .any(|u| u.id != id && u.email.as_deref() == Some(email.as_str()))
            {
                return Err(CoreError::Conflict(format!(
                    "Email '{email}' is already registered"
                )));
            }
        }

        let user = store
            .users
            .get_mut(id)
            .ok_or(CoreError::NotFound { entity: "User", id })?;

        if let Some(email) = &input.email {
            user.email = Some(email.clone());
        }
        if let Some(first_name) = &input.first_name {
            user.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &input.last_name {
            user.last_name = Some(last_name.clone());
        }
        if let Some(avatar) = &input.avatar {
            user.avatar = Some(avatar.clone());
        }
        if let Some(bio) = &input.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(role) = &input.role {
            user.role = role.clone();
        }

        Ok(user.clone())
    }
}
