//! Service layer for the catalog & enrollment data service.
//!
//! This is the surface an (out-of-scope) request layer calls into: the
//! enrollment lifecycle, the aggregation triggers that keep derived
//! fields consistent, review creation, and the checkout/payment-outcome
//! flow. Every operation takes the store by reference and surfaces
//! typed [`learnhub_core::error::CoreError`] failures.

pub mod actor;
pub mod config;
pub mod enrollment;
pub mod payment;
pub mod progress;
pub mod rating;
pub mod review;
