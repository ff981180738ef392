//! # Upcoming Reminder Ranking
//!
//! Resolves each reminder against a single "now", keeps the ones falling inside
//! the horizon and orders them soonest first. The full filtered list is
//! returned; capping it for display is the caller's job.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Annotate entries with the advance-notice date
//! - 1.0.0: Initial horizon filter and ordering

use chrono::{DateTime, Days, NaiveDate, Utc};
use log::debug;
use serde::Serialize;

use super::occurrence::resolve_reminder;
use crate::core::dates::{calendar_day, days_between};
use crate::core::error::{CoreError, CoreResult};
use crate::core::model::{Contact, OccasionType, Reminder};

/// A reminder resolved against one reference instant. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOccurrence {
    pub reminder_id: String,
    pub contact_id: String,
    pub contact_name: String,
    pub contact_email: Option<String>,
    pub occasion_type: OccasionType,
    pub next_occurrence_date: NaiveDate,
    /// 0 = today, 1 = tomorrow
    pub days_until: i64,
    /// Day the advance notice starts (`reminder_days_before` ahead of the occurrence)
    pub notify_on: NaiveDate,
    pub custom_message: Option<String>,
}

impl ResolvedOccurrence {
    pub fn is_notification_due(&self, today: NaiveDate) -> bool {
        today >= self.notify_on
    }
}

/// Rank reminders whose next occurrence falls within `horizon_days` of now.
///
/// Past one-time occasions are dropped. Order is `days_until` ascending, then
/// contact name (case-insensitive), then reminder id.
pub fn rank<'a, I>(
    reminders: I,
    horizon_days: i64,
    now: DateTime<Utc>,
) -> CoreResult<Vec<ResolvedOccurrence>>
where
    I: IntoIterator<Item = (&'a Reminder, &'a Contact)>,
{
    if horizon_days < 0 {
        return Err(CoreError::negative("horizon_days", horizon_days));
    }

    let today = calendar_day(now);
    let mut considered = 0usize;
    let mut upcoming = Vec::new();

    for (reminder, contact) in reminders {
        considered += 1;
        reminder.validate()?;

        let next = resolve_reminder(reminder, now)?;
        let days_until = days_between(today, next);
        if days_until < 0 || days_until > horizon_days {
            continue;
        }

        let notify_on = next
            .checked_sub_days(Days::new(reminder.reminder_days_before.unsigned_abs()))
            .ok_or_else(|| {
                CoreError::invalid_date(
                    next.to_string(),
                    "advance notice reaches before the supported calendar range",
                )
            })?;

        upcoming.push(ResolvedOccurrence {
            reminder_id: reminder.reminder_id.clone(),
            contact_id: contact.contact_id.clone(),
            contact_name: contact.name.clone(),
            contact_email: contact.email.clone(),
            occasion_type: reminder.occasion_type.clone(),
            next_occurrence_date: next,
            days_until,
            notify_on,
            custom_message: reminder.custom_message.clone(),
        });
    }

    upcoming.sort_by_cached_key(|entry| {
        (
            entry.days_until,
            entry.contact_name.to_lowercase(),
            entry.reminder_id.clone(),
        )
    });

    debug!(
        "Ranked {} of {} reminders within {} days of {}",
        upcoming.len(),
        considered,
        horizon_days,
        today
    );
    Ok(upcoming)
}

/// Countdown wording used by the dashboard view
pub fn countdown_label(days_until: i64) -> String {
    match days_until {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("In {n} days"),
    }
}
