//! Payment entity model and DTOs.

use learnhub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::PaymentStatus;

/// A checkout payment record.
///
/// Created `pending`; the external gateway's outcome notification moves
/// it to `completed` or `failed` exactly once, keyed by
/// `payment_reference`. The (user, course) pair doubles as the metadata
/// the success path enrolls from.
#[derive(Debug, Clone, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentStatus,
    /// Token issued by the external payment gateway.
    pub payment_reference: String,
    pub created_at: Timestamp,
}

/// DTO for recording a new pending payment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePayment {
    pub user_id: DbId,
    pub course_id: DbId,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[validate(length(min = 1))]
    pub currency: String,
    #[validate(length(min = 1))]
    pub payment_reference: String,
}
