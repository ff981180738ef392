//! # Feature: Dashboard Summary
//!
//! Headline counts plus a short preview of what is coming up this week.
//! Counts and preview come from one captured "now" so they always agree.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Serialize;

use super::staleness::classify;
use crate::core::config::Config;
use crate::core::dates::calendar_day;
use crate::core::error::CoreResult;
use crate::features::records::RecordSnapshot;
use crate::features::reminders::{countdown_label, rank, ResolvedOccurrence};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    pub horizon_days: i64,
    pub stale_threshold_months: i64,
    /// How many upcoming entries the preview shows
    pub preview_limit: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        DashboardOptions {
            horizon_days: 7,
            stale_threshold_months: 3,
            preview_limit: 5,
        }
    }
}

impl From<&Config> for DashboardOptions {
    fn from(config: &Config) -> Self {
        DashboardOptions {
            horizon_days: config.dashboard_horizon_days,
            stale_threshold_months: config.stale_threshold_months,
            preview_limit: config.dashboard_preview_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_contacts: usize,
    /// Active reminders only
    pub total_reminders: usize,
    pub upcoming_events_count: usize,
    pub stale_contacts_count: usize,
}

/// Upcoming entry with its display countdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingPreview {
    #[serde(flatten)]
    pub occurrence: ResolvedOccurrence,
    pub countdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub as_of: NaiveDate,
    pub stats: DashboardStats,
    pub upcoming_preview: Vec<UpcomingPreview>,
}

pub fn summarize(
    snapshot: &RecordSnapshot,
    options: DashboardOptions,
    now: DateTime<Utc>,
) -> CoreResult<Dashboard> {
    let joined = snapshot.joined_active_reminders()?;
    let total_reminders = joined.len();
    let upcoming = rank(joined, options.horizon_days, now)?;
    let stale = classify(&snapshot.contacts, options.stale_threshold_months, now)?;

    let stats = DashboardStats {
        total_contacts: snapshot.contacts.len(),
        total_reminders,
        upcoming_events_count: upcoming.len(),
        stale_contacts_count: stale.len(),
    };
    debug!("Dashboard stats: {stats:?}");

    let upcoming_preview = upcoming
        .into_iter()
        .take(options.preview_limit)
        .map(|occurrence| UpcomingPreview {
            countdown: countdown_label(occurrence.days_until),
            occurrence,
        })
        .collect();

    Ok(Dashboard {
        as_of: calendar_day(now),
        stats,
        upcoming_preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use crate::core::model::{Contact, Reminder, ReminderStatus};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> RecordSnapshot {
        let contacts = vec![
            Contact::new("c1", "Ada")
                .with_last_contacted(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            Contact::new("c2", "Grace"),
            Contact::new("c3", "Linus")
                .with_last_contacted(Utc.with_ymd_and_hms(2023, 11, 2, 0, 0, 0).unwrap()),
        ];
        let mut paused = Reminder::new("r4", "c3", "anniversary", date(2001, 3, 11), true);
        paused.status = ReminderStatus::Inactive;
        let reminders = vec![
            Reminder::new("r1", "c1", "birthday", date(1990, 3, 10), true),
            Reminder::new("r2", "c2", "birthday", date(1985, 3, 16), true),
            Reminder::new("r3", "c3", "follow-up", date(2024, 5, 1), false),
            paused,
        ];
        RecordSnapshot { contacts, reminders }
    }

    #[test]
    fn test_summarize_counts() {
        let dashboard = summarize(&snapshot(), DashboardOptions::default(), now()).unwrap();
        assert_eq!(dashboard.as_of, date(2024, 3, 10));
        assert_eq!(
            dashboard.stats,
            DashboardStats {
                total_contacts: 3,
                total_reminders: 3,
                upcoming_events_count: 2,
                stale_contacts_count: 2,
            }
        );
    }

    #[test]
    fn test_preview_is_capped_and_labelled() {
        let options = DashboardOptions {
            preview_limit: 1,
            ..DashboardOptions::default()
        };
        let dashboard = summarize(&snapshot(), options, now()).unwrap();
        assert_eq!(dashboard.stats.upcoming_events_count, 2);
        assert_eq!(dashboard.upcoming_preview.len(), 1);
        assert_eq!(dashboard.upcoming_preview[0].occurrence.reminder_id, "r1");
        assert_eq!(dashboard.upcoming_preview[0].countdown, "Today");
    }

    #[test]
    fn test_preview_serializes_flat() {
        let dashboard = summarize(&snapshot(), DashboardOptions::default(), now()).unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();
        let second = &json["upcoming_preview"][1];
        assert_eq!(second["contact_name"], "Grace");
        assert_eq!(second["days_until"], 6);
        assert_eq!(second["countdown"], "In 6 days");
        assert_eq!(json["as_of"], "2024-03-10");
    }

    #[test]
    fn test_dangling_reminder_fails() {
        let mut records = snapshot();
        records
            .reminders
            .push(Reminder::new("r5", "ghost", "custom", date(2024, 3, 12), false));
        assert!(matches!(
            summarize(&records, DashboardOptions::default(), now()),
            Err(CoreError::MissingContact { .. })
        ));
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            dashboard_horizon_days: 14,
            stale_threshold_months: 6,
            dashboard_preview_limit: 3,
            ..Config::default()
        };
        let options = DashboardOptions::from(&config);
        assert_eq!(options.horizon_days, 14);
        assert_eq!(options.stale_threshold_months, 6);
        assert_eq!(options.preview_limit, 3);
    }
}
