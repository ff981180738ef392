//! Command-line front end for the reminder scheduler and relationship analytics
//!
//! Usage: remindme [dashboard | upcoming [DAYS] | stale [MONTHS] [--overdue]]
//!
//! Reads the record snapshot named by REMINDME_DATA_PATH and prints JSON.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{debug, info};
use serde_json::json;

use remindme::core::{validate_stale_months, Config};
use remindme::features::analytics::{classify_with_order, summarize, DashboardOptions};
use remindme::features::records::RecordSnapshot;
use remindme::features::reminders::rank;
use remindme::StalenessOrder;

#[derive(Debug, Parser)]
#[command(name = "remindme", version, about = "Upcoming occasions and contacts needing attention")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Headline counts and this week's preview (default)
    Dashboard,
    /// Reminders falling within the next DAYS days
    Upcoming {
        /// Horizon in days; defaults to REMINDME_UPCOMING_DAYS
        days: Option<i64>,
    },
    /// Contacts silent for at least MONTHS calendar months
    Stale {
        /// Threshold in months; defaults to REMINDME_STALE_MONTHS
        months: Option<i64>,
        /// Oldest contact first instead of by name
        #[arg(long)]
        overdue: bool,
    },
}

/// "Now" for this run: the pinned REMINDME_TODAY at midnight UTC, or the clock
fn reference_now(config: &Config) -> DateTime<Utc> {
    config
        .reference_date
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let command = Cli::parse().command.unwrap_or(Commands::Dashboard);
    debug!("Running {command:?}");

    let snapshot = RecordSnapshot::load(&config.data_path).await?;

    // Captured once so every list printed by this run agrees
    let now = reference_now(&config);
    info!("Reference date: {}", now.date_naive());

    let output = match command {
        Commands::Dashboard => {
            let dashboard = summarize(&snapshot, DashboardOptions::from(&config), now)?;
            serde_json::to_string_pretty(&dashboard)?
        }
        Commands::Upcoming { days } => {
            let horizon = days.unwrap_or(config.upcoming_horizon_days);
            let upcoming = rank(snapshot.joined_active_reminders()?, horizon, now)?;
            serde_json::to_string_pretty(&json!({ "upcoming_reminders": upcoming }))?
        }
        Commands::Stale { months, overdue } => {
            let months = months.unwrap_or(config.stale_threshold_months);
            let order = if overdue {
                StalenessOrder::MostOverdue
            } else {
                StalenessOrder::Name
            };
            validate_stale_months(months)?;
            let stale = classify_with_order(&snapshot.contacts, months, now, order)?;
            serde_json::to_string_pretty(&json!({
                "stale_contacts": stale,
                "count": stale.len(),
            }))?
        }
    };

    println!("{output}");
    Ok(())
}
