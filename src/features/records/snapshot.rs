//! # Record Snapshot
//!
//! Contacts and reminders as exported by the storage layer, read from a JSON or
//! YAML file. Validation and the reminder/contact join happen here so the
//! scheduling and analytics functions only ever see consistent records.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::core::error::{CoreError, CoreResult};
use crate::core::model::{Contact, Reminder};

/// On-disk encoding of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from the file extension; anything unrecognised is read as JSON
    pub fn from_path(path: &str) -> Self {
        match Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => SnapshotFormat::Yaml,
            _ => SnapshotFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl RecordSnapshot {
    /// Read and validate a snapshot file
    pub async fn load(path: &str) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read snapshot {}: {}", path, e))?;
        let snapshot = Self::parse(&contents, SnapshotFormat::from_path(path))?;
        info!(
            "Loaded {} contacts and {} reminders from {}",
            snapshot.contacts.len(),
            snapshot.reminders.len(),
            path
        );
        Ok(snapshot)
    }

    pub fn parse(contents: &str, format: SnapshotFormat) -> Result<Self> {
        let snapshot: RecordSnapshot = match format {
            SnapshotFormat::Json => serde_json::from_str(contents)?,
            SnapshotFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Integrity checks the storage layer is expected to enforce on write
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for contact in &self.contacts {
            if contact.name.trim().is_empty() {
                return Err(anyhow::anyhow!(
                    "Contact {} has an empty name",
                    contact.contact_id
                ));
            }
            if !seen.insert(contact.contact_id.as_str()) {
                return Err(anyhow::anyhow!(
                    "Duplicate contact id: {}",
                    contact.contact_id
                ));
            }
        }

        for reminder in &self.reminders {
            reminder
                .validate()
                .map_err(|e| anyhow::anyhow!("Reminder {}: {}", reminder.reminder_id, e))?;
        }
        Ok(())
    }

    pub fn active_reminders(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.iter().filter(|reminder| reminder.is_active())
    }

    /// Pair every active reminder with its contact
    pub fn joined_active_reminders(&self) -> CoreResult<Vec<(&Reminder, &Contact)>> {
        let by_id: HashMap<&str, &Contact> = self
            .contacts
            .iter()
            .map(|contact| (contact.contact_id.as_str(), contact))
            .collect();

        self.active_reminders()
            .map(|reminder| {
                by_id
                    .get(reminder.contact_id.as_str())
                    .map(|contact| (reminder, *contact))
                    .ok_or_else(|| CoreError::MissingContact {
                        reminder_id: reminder.reminder_id.clone(),
                        contact_id: reminder.contact_id.clone(),
                    })
            })
            .collect()
    }
}
