//! Lifecycle and difficulty enums stored as lowercase strings.

use learnhub_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// Course difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse a lowercase level string; anything else is a validation error.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(CoreError::Validation(format!(
                "Invalid course level '{other}'. Must be one of: beginner, intermediate, advanced"
            ))),
        }
    }
}

/// Enrollment lifecycle status.
///
/// The only transition any operation performs is `Active -> Completed`;
/// `Cancelled` is stored for future use but never entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl EnrollmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Payment lifecycle status. Created `Pending`, transitions exactly once
/// to `Completed` or `Failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether the payment has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}
