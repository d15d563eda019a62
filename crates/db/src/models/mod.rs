//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `Clone` entity struct matching the stored record
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the entity
//!   is patchable at all

pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod payment;
pub mod review;
pub mod status;
pub mod user;
