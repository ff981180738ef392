//! # Occurrence Resolution
//!
//! Turns a stored occasion date plus its recurrence flag into the next concrete
//! date the occasion falls on, relative to a caller-supplied "now".
//!
//! Leap-day policy: a Feb 29 occasion resolves to Feb 28 in years without a
//! Feb 29, and back to Feb 29 in leap years.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::core::dates::{anniversary_in_year, calendar_day};
use crate::core::error::{CoreError, CoreResult};
use crate::core::model::Reminder;

/// Next occurrence of an occasion relative to `now`.
///
/// One-time occasions come back unchanged, even when already past. Recurring
/// occasions resolve to the first same-month/day date on or after now's
/// calendar day.
pub fn resolve(
    occasion_date: NaiveDate,
    is_recurring: bool,
    now: DateTime<Utc>,
) -> CoreResult<NaiveDate> {
    if !is_recurring {
        return Ok(occasion_date);
    }
    next_on_or_after(occasion_date, calendar_day(now))
}

/// Resolve a reminder using its own recurrence flag
pub fn resolve_reminder(reminder: &Reminder, now: DateTime<Utc>) -> CoreResult<NaiveDate> {
    resolve(reminder.occasion_date, reminder.is_recurring, now)
}

/// First yearly recurrence of `occasion_date` falling on or after `today`
pub fn next_on_or_after(occasion_date: NaiveDate, today: NaiveDate) -> CoreResult<NaiveDate> {
    let year = today.year();
    let candidate =
        anniversary_in_year(occasion_date, year).ok_or_else(|| out_of_range(occasion_date))?;
    if candidate >= today {
        return Ok(candidate);
    }
    year.checked_add(1)
        .and_then(|next_year| anniversary_in_year(occasion_date, next_year))
        .ok_or_else(|| out_of_range(occasion_date))
}

fn out_of_range(occasion_date: NaiveDate) -> CoreError {
    CoreError::invalid_date(
        occasion_date.to_string(),
        "next occurrence is outside the supported calendar range",
    )
}
