//! Checkout and the payment-outcome notification path.
//!
//! The payment gateway itself is an external collaborator; this module
//! only records pending payments and applies the gateway's outcome.
//! Outcome delivery is the one asynchronous boundary in the system, so
//! the notification path must tolerate redelivery.

use learnhub_core::error::CoreError;
use learnhub_core::pricing::effective_price;
use learnhub_core::types::DbId;
use learnhub_db::models::payment::{CreatePayment, Payment};
use learnhub_db::models::status::PaymentStatus;
use learnhub_db::repositories::{CourseRepo, EnrollmentRepo, PaymentRepo};
use learnhub_db::Store;

use crate::actor::Actor;
use crate::config::ServiceConfig;
use crate::enrollment::enroll;

/// Record a pending payment for a course the actor wants to buy.
///
/// The amount is the course's effective price; the reference token is
/// issued by the gateway and later keys the outcome notification. An
/// already-enrolled actor gets `Conflict` -- there is nothing to buy.
pub fn begin_checkout(
    store: &mut Store,
    config: &ServiceConfig,
    actor: &Actor,
    course_id: DbId,
    payment_reference: &str,
) -> Result<Payment, CoreError> {
    let course = CourseRepo::find_by_id(store, course_id).ok_or(CoreError::NotFound {
        entity: "Course",
        id: course_id,
    })?;
    if EnrollmentRepo::find_by_user_and_course(store, actor.user_id, course_id).is_some() {
        return Err(CoreError::Conflict(
            "Already enrolled in this course".to_string(),
        ));
    }

    let payment = PaymentRepo::create(
        store,
        &CreatePayment {
            user_id: actor.user_id,
            course_id,
            amount: effective_price(course.price, course.discount_price),
            currency: config.default_currency.clone(),
            payment_reference: payment_reference.to_string(),
        },
    )?;
    tracing::info!(
        payment_id = payment.id,
        user_id = actor.user_id,
        course_id,
        amount = payment.amount,
        "Checkout started",
    );
    Ok(payment)
}

/// Apply a payment outcome delivered by the external gateway.
///
/// On `completed` the payment's (user, course) metadata drives an
/// enrollment; on `failed` only the payment status moves. A payment
/// transitions out of `pending` exactly once: redelivering the same
/// terminal outcome is a no-op (though the success path still consults
/// the enrollment-uniqueness check), while a conflicting outcome is
/// `Conflict`. `pending` is not an outcome.
pub fn notify_payment_outcome(
    store: &mut Store,
    payment_reference: &str,
    outcome: PaymentStatus,
) -> Result<Payment, CoreError> {
    if !outcome.is_terminal() {
        return Err(CoreError::Validation(
            "Payment outcome must be 'completed' or 'failed'".to_string(),
        ));
    }

    let payment = PaymentRepo::find_by_reference(store, payment_reference).ok_or_else(|| {
        CoreError::NotFoundByReference {
            entity: "Payment",
            reference: payment_reference.to_string(),
        }
    })?;

    if payment.status.is_terminal() && payment.status != outcome {
        return Err(CoreError::Conflict(format!(
            "Payment '{}' is already {}",
            payment_reference,
            payment.status.as_str()
        )));
    }

    let payment = if payment.status.is_terminal() {
        // Redelivery of the same outcome; nothing to write.
        payment
    } else {
        PaymentRepo::set_status(store, payment_reference, outcome)?
    };

    if outcome == PaymentStatus::Completed {
        // Enroll from the metadata attached at checkout. The uniqueness
        // check makes redelivery safe: a duplicate surfaces Conflict
        // here and is swallowed.
        match enroll(store, payment.user_id, payment.course_id) {
            Ok(_) => {}
            Err(CoreError::Conflict(_)) => {
                tracing::warn!(
                    payment_reference,
                    user_id = payment.user_id,
                    course_id = payment.course_id,
                    "Payment outcome redelivered; user already enrolled",
                );
            }
            Err(other) => return Err(other),
        }
    }

    tracing::info!(
        payment_reference,
        status = outcome.as_str(),
        "Payment outcome applied",
    );
    Ok(payment)
}
