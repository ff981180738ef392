//! Typed errors for the scheduling and analytics core
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use thiserror::Error;

/// Errors raised by the pure scheduling/analytics functions and the record join.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid date \"{input}\": {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("invalid {name} = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("reminder {reminder_id} references unknown contact {contact_id}")]
    MissingContact {
        reminder_id: String,
        contact_id: String,
    },
}

impl CoreError {
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Reject negative counts (days, months) instead of clamping them
    pub fn negative(name: &'static str, value: i64) -> Self {
        CoreError::InvalidArgument {
            name,
            value,
            reason: "must not be negative",
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
