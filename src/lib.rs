// Core layer - shared types, configuration, errors and calendar arithmetic
pub mod core;

// Features layer - reminders, analytics, records
pub mod features;

// Re-export core config for convenience
pub use self::core::{Config, CoreError, CoreResult};

// Re-export feature items
pub use features::{
    // Analytics
    analytics::{classify_with_order, DashboardOptions, DashboardStats},
    classify,
    summarize,
    Dashboard,
    // Records
    RecordSnapshot,
    // Reminders
    rank,
    reminders::countdown_label,
    resolve,
    ResolvedOccurrence,
    StalenessOrder,
    StalenessResult,
};

// Re-export domain records
pub use self::core::model::{Birthday, Contact, OccasionType, Reminder, ReminderStatus};
