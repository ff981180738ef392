//! # Feature: Relationship Staleness
//!
//! Flags contacts that have gone quiet for at least a threshold number of
//! calendar months. Months are counted component-wise (year, month, day), so
//! the result does not drift with month length.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Most-overdue ordering alongside the default name ordering
//! - 1.0.0: Initial calendar-month classifier

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Serialize;

use crate::core::dates::{calendar_day, calendar_months_between};
use crate::core::error::{CoreError, CoreResult};
use crate::core::model::Contact;

/// Staleness verdict for one contact, valid only for the "now" it was computed at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StalenessResult {
    pub contact_id: String,
    pub name: String,
    pub email: Option<String>,
    pub relationship: Option<String>,
    pub last_contacted: Option<DateTime<Utc>>,
    /// Elapsed calendar months; `None` when never contacted
    pub months_silent: Option<i64>,
    pub is_stale: bool,
}

/// How the stale list is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalenessOrder {
    /// Name ascending, case-insensitive
    #[default]
    Name,
    /// Oldest contact first, never-contacted before everyone else
    MostOverdue,
}

/// Evaluate a single contact against the threshold
pub fn assess(contact: &Contact, threshold_months: i64, today: NaiveDate) -> StalenessResult {
    let months_silent = contact
        .last_contacted
        .map(|last| calendar_months_between(calendar_day(last), today));
    let is_stale = months_silent.map_or(true, |months| months >= threshold_months);

    StalenessResult {
        contact_id: contact.contact_id.clone(),
        name: contact.name.clone(),
        email: contact.email.clone(),
        relationship: contact.relationship.clone(),
        last_contacted: contact.last_contacted,
        months_silent,
        is_stale,
    }
}

/// Stale contacts in the default (name) order
pub fn classify<'a, I>(
    contacts: I,
    threshold_months: i64,
    now: DateTime<Utc>,
) -> CoreResult<Vec<StalenessResult>>
where
    I: IntoIterator<Item = &'a Contact>,
{
    classify_with_order(contacts, threshold_months, now, StalenessOrder::Name)
}

/// Stale contacts in the requested order
pub fn classify_with_order<'a, I>(
    contacts: I,
    threshold_months: i64,
    now: DateTime<Utc>,
    order: StalenessOrder,
) -> CoreResult<Vec<StalenessResult>>
where
    I: IntoIterator<Item = &'a Contact>,
{
    if threshold_months <= 0 {
        return Err(CoreError::InvalidArgument {
            name: "threshold_months",
            value: threshold_months,
            reason: "must be a positive number of months",
        });
    }

    let today = calendar_day(now);
    let mut considered = 0usize;
    let mut stale: Vec<StalenessResult> = contacts
        .into_iter()
        .inspect(|_| considered += 1)
        .map(|contact| assess(contact, threshold_months, today))
        .filter(|result| result.is_stale)
        .collect();
    sort_results(&mut stale, order);

    debug!(
        "{} of {} contacts silent for {}+ months as of {}",
        stale.len(),
        considered,
        threshold_months,
        today
    );
    Ok(stale)
}

/// Re-sort an existing result list
pub fn sort_results(results: &mut [StalenessResult], order: StalenessOrder) {
    match order {
        StalenessOrder::Name => results.sort_by_cached_key(name_key),
        StalenessOrder::MostOverdue => results.sort_by_cached_key(most_overdue_key),
    }
}

/// Sort key for "most overdue first": `None` (never contacted) sorts before any instant
pub fn most_overdue_key(result: &StalenessResult) -> (Option<DateTime<Utc>>, String, String) {
    (
        result.last_contacted,
        result.name.to_lowercase(),
        result.contact_id.clone(),
    )
}

fn name_key(result: &StalenessResult) -> (String, String) {
    (result.name.to_lowercase(), result.contact_id.clone())
}
