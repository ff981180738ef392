//! # Analytics Feature
//!
//! Relationship health: contacts needing attention and the dashboard summary.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod dashboard;
pub mod staleness;

pub use dashboard::{summarize, Dashboard, DashboardOptions, DashboardStats};
pub use staleness::{
    assess, classify, classify_with_order, most_overdue_key, sort_results, StalenessOrder,
    StalenessResult,
};
