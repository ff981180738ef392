//! # Core Module
//!
//! Core domain types, configuration, and error handling shared by the
//! reminder scheduler and the relationship analytics.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod dates;
pub mod error;
pub mod model;

// Re-export commonly used items
pub use config::{validate_stale_months, Config, STALE_MONTH_CHOICES};
pub use error::{CoreError, CoreResult};
pub use model::{
    Birthday, Contact, OccasionType, Reminder, ReminderStatus, DEFAULT_REMINDER_DAYS_BEFORE,
};
