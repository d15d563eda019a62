use crate::types::DbId;

/// Domain error shared by the store, query, and service layers.
///
/// An (out-of-scope) request layer is responsible for mapping these to
/// user-facing responses; no operation recovers from them silently.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity id does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// An entity looked up by an external reference token does not exist.
    #[error("Entity not found: {entity} with reference '{reference}'")]
    NotFoundByReference {
        entity: &'static str,
        reference: String,
    },

    /// A field or filter value is outside its allowed domain.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness invariant would be violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No authenticated user was supplied for an operation that needs one.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller does not own the resource being mutated.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An entity that must exist per the invariants is missing.
    /// Indicates a bug in this process, not a caller error.
    #[error("Inconsistent state: {entity} with id {id} is referenced but missing")]
    Inconsistent { entity: &'static str, id: DbId },
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
