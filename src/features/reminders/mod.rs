//! # Reminders Feature
//!
//! Occasion scheduling: next-occurrence resolution for one-time and yearly
//! occasions, and the ranked list of upcoming reminders.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod occurrence;
pub mod ranker;

pub use occurrence::{next_on_or_after, resolve, resolve_reminder};
pub use ranker::{countdown_label, rank, ResolvedOccurrence};
