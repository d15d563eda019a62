//! In-memory entity store for the catalog & enrollment data service.
//!
//! The [`store::Store`] owns one insertion-ordered keyed collection per
//! entity type plus per-type id counters. All access goes through the
//! repositories, which enforce uniqueness invariants and keep derived
//! counters consistent. There is no global state: tests construct
//! isolated `Store` instances.

pub mod models;
pub mod repositories;
pub mod store;

pub use store::Store;
