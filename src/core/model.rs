//! # Domain Records
//!
//! Contact and reminder records as the storage layer hands them over. The core
//! only reads them; derived views (next occurrence, staleness) are computed per
//! request and never written back.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Birthday parsing for year-less dates, reminder status
//! - 1.0.0: Initial contact/reminder records

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::dates::{parse_calendar_date, parse_instant};
use super::error::{CoreError, CoreResult};

/// Days of advance notice a reminder gets when none is stored
pub const DEFAULT_REMINDER_DAYS_BEFORE: i64 = 3;

/// Leap year used to anchor birthdays stored without a year, so Feb 29 stays valid
const YEARLESS_ANCHOR: i32 = 2000;

/// A person the user keeps in touch with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub contact_id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_birthday_as_none")]
    pub birthday: Option<Birthday>,
    #[serde(default)]
    pub relationship: Option<String>,
    /// `None` means never contacted
    #[serde(default, deserialize_with = "optional_instant")]
    pub last_contacted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub contact_frequency: u32,
}

impl Contact {
    pub fn new(contact_id: impl Into<String>, name: impl Into<String>) -> Self {
        Contact {
            contact_id: contact_id.into(),
            name: name.into(),
            email: None,
            phone: None,
            birthday: None,
            relationship: None,
            last_contacted: None,
            notes: None,
            tags: Vec::new(),
            contact_frequency: 0,
        }
    }

    pub fn with_last_contacted(mut self, at: DateTime<Utc>) -> Self {
        self.last_contacted = Some(at);
        self
    }
}

/// Kind of occasion a reminder tracks. Open-ended: unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OccasionType {
    Birthday,
    Anniversary,
    FollowUp,
    Other(String),
}

impl OccasionType {
    pub fn as_str(&self) -> &str {
        match self {
            OccasionType::Birthday => "birthday",
            OccasionType::Anniversary => "anniversary",
            OccasionType::FollowUp => "follow-up",
            OccasionType::Other(label) => label,
        }
    }
}

impl From<String> for OccasionType {
    fn from(label: String) -> Self {
        match label.trim().to_lowercase().as_str() {
            "birthday" => OccasionType::Birthday,
            "anniversary" => OccasionType::Anniversary,
            "follow-up" | "follow_up" | "followup" => OccasionType::FollowUp,
            _ => OccasionType::Other(label),
        }
    }
}

impl From<&str> for OccasionType {
    fn from(label: &str) -> Self {
        OccasionType::from(label.to_string())
    }
}

impl From<OccasionType> for String {
    fn from(kind: OccasionType) -> Self {
        match kind {
            OccasionType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OccasionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a reminder should still surface in upcoming lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    #[default]
    Active,
    Inactive,
}

/// A user-created reminder for one contact's occasion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub reminder_id: String,
    pub contact_id: String,
    pub occasion_type: OccasionType,
    #[serde(with = "calendar_date")]
    pub occasion_date: NaiveDate,
    #[serde(default = "default_days_before")]
    pub reminder_days_before: i64,
    #[serde(default = "default_true")]
    pub is_recurring: bool,
    #[serde(default)]
    pub custom_message: Option<String>,
    #[serde(default)]
    pub status: ReminderStatus,
}

impl Reminder {
    pub fn new(
        reminder_id: impl Into<String>,
        contact_id: impl Into<String>,
        occasion_type: impl Into<OccasionType>,
        occasion_date: NaiveDate,
        is_recurring: bool,
    ) -> Self {
        Reminder {
            reminder_id: reminder_id.into(),
            contact_id: contact_id.into(),
            occasion_type: occasion_type.into(),
            occasion_date,
            reminder_days_before: DEFAULT_REMINDER_DAYS_BEFORE,
            is_recurring,
            custom_message: None,
            status: ReminderStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ReminderStatus::Active
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.reminder_days_before < 0 {
            return Err(CoreError::negative(
                "reminder_days_before",
                self.reminder_days_before,
            ));
        }
        Ok(())
    }
}

/// A birthday whose year may be unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday {
    date: NaiveDate,
    year_known: bool,
}

impl Birthday {
    /// Accepts `YYYY-MM-DD`, `MM-DD` or `--MM-DD`
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        let month_day = trimmed.strip_prefix("--").unwrap_or(trimmed);
        if month_day.len() == 5 {
            let anchored = format!("{YEARLESS_ANCHOR}-{month_day}");
            let date = NaiveDate::parse_from_str(&anchored, "%Y-%m-%d")
                .map_err(|e| CoreError::invalid_date(input, e.to_string()))?;
            return Ok(Birthday {
                date,
                year_known: false,
            });
        }
        Ok(Birthday {
            date: parse_calendar_date(trimmed)?,
            year_known: true,
        })
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn year(&self) -> Option<i32> {
        self.year_known.then(|| self.date.year())
    }

    /// Date usable as a recurring occasion; only month and day matter for recurrence
    pub fn occasion_date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<String> for Birthday {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Birthday::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year_known {
            write!(f, "{}", self.date.format("%Y-%m-%d"))
        } else {
            write!(f, "--{}", self.date.format("%m-%d"))
        }
    }
}

fn default_days_before() -> i64 {
    DEFAULT_REMINDER_DAYS_BEFORE
}

fn default_true() -> bool {
    true
}

fn blank_birthday_as_none<'de, D>(deserializer: D) -> Result<Option<Birthday>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => Birthday::parse(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

fn optional_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => parse_instant(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// `YYYY-MM-DD` on the way out, any ISO date (time part ignored) on the way in
mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_occasion_type_known_labels() {
        assert_eq!(OccasionType::from("Birthday"), OccasionType::Birthday);
        assert_eq!(OccasionType::from("follow_up"), OccasionType::FollowUp);
        assert_eq!(OccasionType::FollowUp.as_str(), "follow-up");
    }

    #[test]
    fn test_occasion_type_keeps_custom_label() {
        let kind = OccasionType::from("Graduation");
        assert_eq!(kind, OccasionType::Other("Graduation".to_string()));
        assert_eq!(String::from(kind), "Graduation");
    }

    #[test]
    fn test_reminder_defaults_from_json() {
        let reminder: Reminder = serde_json::from_str(
            r#"{"reminder_id":"r1","contact_id":"c1","occasion_type":"birthday","occasion_date":"1990-05-04T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(reminder.reminder_days_before, 3);
        assert!(reminder.is_recurring);
        assert!(reminder.is_active());
        assert_eq!(reminder.occasion_date, NaiveDate::from_ymd_opt(1990, 5, 4).unwrap());
    }

    #[test]
    fn test_reminder_rejects_invalid_occasion_date() {
        let result: Result<Reminder, _> = serde_json::from_str(
            r#"{"reminder_id":"r1","contact_id":"c1","occasion_type":"custom","occasion_date":"2023-02-29"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_reminder_validate_negative_days_before() {
        let mut reminder = Reminder::new(
            "r1",
            "c1",
            "anniversary",
            NaiveDate::from_ymd_opt(2010, 6, 1).unwrap(),
            true,
        );
        assert!(reminder.validate().is_ok());
        reminder.reminder_days_before = -2;
        assert!(matches!(
            reminder.validate(),
            Err(CoreError::InvalidArgument { name: "reminder_days_before", value: -2, .. })
        ));
    }

    #[test]
    fn test_reminder_serializes_plain_date() {
        let reminder = Reminder::new(
            "r1",
            "c1",
            OccasionType::Anniversary,
            NaiveDate::from_ymd_opt(2010, 6, 1).unwrap(),
            false,
        );
        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["occasion_date"], "2010-06-01");
        assert_eq!(json["occasion_type"], "anniversary");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_birthday_with_and_without_year() {
        let full = Birthday::parse("1988-11-23").unwrap();
        assert_eq!(full.year(), Some(1988));
        assert_eq!(full.to_string(), "1988-11-23");

        let yearless = Birthday::parse("--02-29").unwrap();
        assert_eq!(yearless.year(), None);
        assert_eq!((yearless.month(), yearless.day()), (2, 29));
        assert_eq!(yearless.to_string(), "--02-29");
        assert_eq!(Birthday::parse("02-29").unwrap(), yearless);
    }

    #[test]
    fn test_birthday_rejects_garbage() {
        assert!(Birthday::parse("13-01").is_err());
        assert!(Birthday::parse("someday").is_err());
    }

    #[test]
    fn test_contact_lenient_fields() {
        let contact: Contact = serde_json::from_str(
            r#"{"contact_id":"c1","name":"Ada","birthday":"","last_contacted":"2024-02-15T10:00:00"}"#,
        )
        .unwrap();
        assert_eq!(contact.birthday, None);
        assert_eq!(
            contact.last_contacted,
            Some(Utc.with_ymd_and_hms(2024, 2, 15, 10, 0, 0).unwrap())
        );
        assert!(contact.tags.is_empty());
    }

    #[test]
    fn test_contact_never_contacted() {
        let contact: Contact =
            serde_json::from_str(r#"{"contact_id":"c1","name":"Ada","last_contacted":null}"#)
                .unwrap();
        assert_eq!(contact.last_contacted, None);
    }
}
