//! Repository for payment records.

use chrono::Utc;
use learnhub_core::error::CoreError;
use learnhub_core::types::DbId;
use validator::Validate;

use crate::models::payment::{CreatePayment, Payment};
use crate::models::status::PaymentStatus;
use crate::store::Store;

/// Provides CRUD operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a new pending payment.
    ///
    /// The external reference token must be unique; the user and course
    /// must exist.
    pub fn create(store: &mut Store, input: &CreatePayment) -> Result<Payment, CoreError> {
        input.validate()?;

        if store.users.get(input.user_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "User",
                id: input.user_id,
            });
        }
        if store.courses.get(input.course_id).is_none() {
            return Err(CoreError::NotFound {
                entity: "Course",
                id: input.course_id,
            });
        }
        if store
            .payments
            .iter()
            .any(|p| p.payment_reference == input.payment_reference)
        {
            return Err(CoreError::Conflict(format!(
                "Payment reference '{}' already exists",
                input.payment_reference
            )));
        }

        let id = store.payments.alloc_id();
        let payment = Payment {
            id,
            user_id: input.user_id,
            course_id: input.course_id,
            amount: input.amount,
            currency: input.currency.clone(),
            status: PaymentStatus::Pending,
            payment_reference: input.payment_reference.clone(),
            created_at: Utc::now(),
        };
        store.payments.insert(id, payment.clone());
        Ok(payment)
    }

    /// Find a payment by internal id.
    pub fn find_by_id(store: &Store, id: DbId) -> Option<Payment> {
        store.payments.get(id).cloned()
    }

    /// Find a payment by its external reference token.
    pub fn find_by_reference(store: &Store, reference: &str) -> Option<Payment> {
        store
            .payments
            .iter()
            .find(|p| p.payment_reference == reference)
            .cloned()
    }

    /// All of a user's payments, in insertion order.
    pub fn list_by_user(store: &Store, user_id: DbId) -> Vec<Payment> {
        store
            .payments
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Overwrite a payment's status, keyed by the external reference.
    ///
    /// Mechanical write; the exactly-once transition rules live in the
    /// service layer.
    pub fn set_status(
        store: &mut Store,
        reference: &str,
        status: PaymentStatus,
    ) -> Result<Payment, CoreError> {
        let id = store
            .payments
            .iter()
            .find(|p| p.payment_reference == reference)
            .map(|p| p.id)
            .ok_or_else(|| CoreError::NotFoundByReference {
                entity: "Payment",
                reference: reference.to_string(),
            })?;
        let payment = store.payments.get_mut(id).ok_or(CoreError::NotFound {
            entity: "Payment",
            id,
        })?;
        payment.status = status;
        Ok(payment.clone())
    }
}
