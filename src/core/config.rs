//! Runtime configuration loaded from the environment
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use chrono::NaiveDate;
use std::env;
use std::str::FromStr;

use super::dates::parse_calendar_date;

/// Staleness thresholds (in months) the analytics view offers
pub const STALE_MONTH_CHOICES: &[i64] = &[1, 2, 3, 6, 12];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub data_path: String,
    pub upcoming_horizon_days: i64,
    pub dashboard_horizon_days: i64,
    pub stale_threshold_months: i64,
    pub dashboard_preview_limit: usize,
    /// Pins "today" for reproducible runs; the real clock is used when unset
    pub reference_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            data_path: "remindme.json".to_string(),
            upcoming_horizon_days: 30,
            dashboard_horizon_days: 7,
            stale_threshold_months: 3,
            dashboard_preview_limit: 5,
            reference_date: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let reference_date = match env::var("REMINDME_TODAY") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                parse_calendar_date(&raw)
                    .map_err(|e| anyhow::anyhow!("REMINDME_TODAY: {}", e))?,
            ),
            _ => None,
        };

        let config = Config {
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            data_path: env::var("REMINDME_DATA_PATH").unwrap_or(defaults.data_path),
            upcoming_horizon_days: parse_var(
                "REMINDME_UPCOMING_DAYS",
                defaults.upcoming_horizon_days,
            )?,
            dashboard_horizon_days: parse_var(
                "REMINDME_DASHBOARD_DAYS",
                defaults.dashboard_horizon_days,
            )?,
            stale_threshold_months: parse_var(
                "REMINDME_STALE_MONTHS",
                defaults.stale_threshold_months,
            )?,
            dashboard_preview_limit: parse_var(
                "REMINDME_DASHBOARD_PREVIEW",
                defaults.dashboard_preview_limit,
            )?,
            reference_date,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.upcoming_horizon_days < 0 {
            return Err(anyhow::anyhow!(
                "REMINDME_UPCOMING_DAYS must not be negative (got {})",
                self.upcoming_horizon_days
            ));
        }
        if self.dashboard_horizon_days < 0 {
            return Err(anyhow::anyhow!(
                "REMINDME_DASHBOARD_DAYS must not be negative (got {})",
                self.dashboard_horizon_days
            ));
        }
        validate_stale_months(self.stale_threshold_months)?;
        if self.dashboard_preview_limit == 0 {
            return Err(anyhow::anyhow!("REMINDME_DASHBOARD_PREVIEW must be at least 1"));
        }
        Ok(())
    }
}

/// Caller-side check that a staleness threshold is one of the offered choices
pub fn validate_stale_months(months: i64) -> Result<()> {
    if STALE_MONTH_CHOICES.contains(&months) {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "stale threshold must be one of {:?} months (got {})",
            STALE_MONTH_CHOICES,
            months
        ))
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}: invalid value '{}': {}", name, raw, e)),
        Err(_) => Ok(default),
    }
}
