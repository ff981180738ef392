//! # Records Feature
//!
//! Loading contact and reminder records handed over by the storage layer.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod snapshot;

pub use snapshot::{RecordSnapshot, SnapshotFormat};
