//! # Features
//!
//! - `reminders`: next-occurrence resolution and upcoming ranking
//! - `analytics`: staleness classification and dashboard summary
//! - `records`: snapshot loading and the reminder/contact join

pub mod analytics;
pub mod records;
pub mod reminders;

pub use analytics::{classify, summarize, Dashboard, StalenessOrder, StalenessResult};
pub use records::RecordSnapshot;
pub use reminders::{rank, resolve, ResolvedOccurrence};
