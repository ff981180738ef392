//! Calendar arithmetic shared by the scheduler and the staleness analyzer
//!
//! All comparisons happen on calendar dates taken from UTC instants. There is
//! no timezone conversion anywhere in the crate.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use super::error::{CoreError, CoreResult};

/// The calendar day a reference instant falls on
pub fn calendar_day(now: DateTime<Utc>) -> NaiveDate {
    now.date_naive()
}

/// Same month/day as `date`, moved into `year`.
///
/// Feb 29 lands on Feb 28 when `year` is not a leap year. Returns `None` only
/// when `year` is outside chrono's representable range.
pub fn anniversary_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    let (month, day) = (date.month(), date.day());
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Whole days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Elapsed calendar months between two dates.
///
/// Component-wise: year and month difference, minus one when the day of month
/// in `later` has not yet reached the day of month in `earlier`.
pub fn calendar_months_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    let years = i64::from(later.year()) - i64::from(earlier.year());
    let months = i64::from(later.month()) - i64::from(earlier.month());
    let mut elapsed = years * 12 + months;
    if later.day() < earlier.day() {
        elapsed -= 1;
    }
    elapsed
}

/// Parse an ISO-8601 calendar date. A trailing time part (`T...` or ` ...`) is ignored.
pub fn parse_calendar_date(input: &str) -> CoreResult<NaiveDate> {
    let trimmed = input.trim();
    let date_part = match trimmed.get(10..11) {
        Some("T") | Some(" ") => &trimmed[..10],
        _ => trimmed,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| CoreError::invalid_date(input, e.to_string()))
}

/// Parse a point in time: RFC 3339, or a naive ISO timestamp / bare date taken as UTC
pub fn parse_instant(input: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::invalid_date(input, "expected an ISO-8601 timestamp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anniversary_keeps_month_and_day() {
        assert_eq!(anniversary_in_year(date(1990, 7, 14), 2024), Some(date(2024, 7, 14)));
    }

    #[test]
    fn test_leap_day_clamps_in_common_year() {
        assert_eq!(anniversary_in_year(date(2000, 2, 29), 2025), Some(date(2025, 2, 28)));
        assert_eq!(anniversary_in_year(date(2000, 2, 29), 2028), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_anniversary_out_of_range_year() {
        assert_eq!(anniversary_in_year(date(2000, 1, 1), i32::MAX), None);
    }

    #[test]
    fn test_days_between_across_year_boundary() {
        assert_eq!(days_between(date(2024, 12, 30), date(2025, 1, 2)), 3);
        assert_eq!(days_between(date(2025, 1, 2), date(2024, 12, 30)), -3);
    }

    #[test]
    fn test_calendar_months_exact_and_partial() {
        assert_eq!(calendar_months_between(date(2023, 12, 1), date(2024, 3, 10)), 3);
        assert_eq!(calendar_months_between(date(2023, 12, 10), date(2024, 3, 10)), 3);
        assert_eq!(calendar_months_between(date(2023, 12, 11), date(2024, 3, 10)), 2);
        assert_eq!(calendar_months_between(date(2024, 2, 15), date(2024, 3, 10)), 0);
    }

    #[test]
    fn test_calendar_months_short_month() {
        // Jan 31 -> Feb 29 has not completed a month yet
        assert_eq!(calendar_months_between(date(2024, 1, 31), date(2024, 2, 29)), 0);
        assert_eq!(calendar_months_between(date(2024, 1, 31), date(2024, 3, 31)), 2);
    }

    #[test]
    fn test_parse_calendar_date_variants() {
        assert_eq!(parse_calendar_date("2024-03-12").unwrap(), date(2024, 3, 12));
        assert_eq!(parse_calendar_date("2024-03-12T00:00:00").unwrap(), date(2024, 3, 12));
        assert_eq!(parse_calendar_date(" 2024-03-12 ").unwrap(), date(2024, 3, 12));
    }

    #[test]
    fn test_parse_calendar_date_rejects_invalid() {
        assert!(matches!(
            parse_calendar_date("2023-02-30"),
            Err(CoreError::InvalidDate { .. })
        ));
        assert!(parse_calendar_date("next tuesday").is_err());
        assert!(parse_calendar_date("").is_err());
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 2, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_instant("2024-02-15T10:30:00Z").unwrap(), expected);
        assert_eq!(parse_instant("2024-02-15T11:30:00+01:00").unwrap(), expected);
        assert_eq!(parse_instant("2024-02-15T10:30:00").unwrap(), expected);
        assert_eq!(parse_instant("2024-02-15T10:30:00.000123").unwrap().minute(), 30);
        assert_eq!(
            parse_instant("2024-02-15").unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap()
        );
        assert!(parse_instant("yesterday").is_err());
    }
}
