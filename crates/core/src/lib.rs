//! Shared domain types, errors, and pure catalog/enrollment logic.
//!
//! This crate holds everything the storage and service layers agree on:
//! the id/timestamp aliases, the domain error enum, and the arithmetic
//! for derived values (effective price, progress percentage, rating
//! mean). Nothing here touches the store.

pub mod error;
pub mod pricing;
pub mod progress;
pub mod rating;
pub mod types;
