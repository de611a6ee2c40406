// ABOUTME: NutriGuard CLI - food safety assessment and nutrition progress from JSON files
// ABOUTME: Prints assessments, range summaries, weekly overviews, and safety scores as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Assess one item for a 30 year old
//! nutriguard-cli assess --profile soda.json --age 30 --beverage --label "cola"
//!
//! # Log a meal and print per-item verdicts plus the meal summary
//! nutriguard-cli meal --items lunch.json --age 30
//!
//! # Range summary over stored daily totals
//! nutriguard-cli summary --totals totals.json --goal goal.json --from 2025-03-01 --to 2025-03-07
//!
//! # Weekly chart view
//! nutriguard-cli weekly --totals totals.json --goal goal.json --week-start 2025-03-05 --mode chart
//!
//! # Safety score for item counts
//! nutriguard-cli score --safe 9 --unsafe 1
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use nutriguard::config::IntelligenceConfig;
use nutriguard::logging::LoggingConfig;
use nutriguard::models::Sex;
use nutriguard::services::meal_safety::EaterProfile;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriguard-cli",
    about = "NutriGuard food safety and nutrition progress CLI",
    long_about = "Evaluates food items against the Dietary Guidelines for Americans and aggregates daily nutrient totals into progress views."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Consumer flags shared by item evaluation commands
#[derive(Args, Debug, Clone)]
struct EaterArgs {
    /// Age in whole years (0 = unknown)
    #[arg(long, default_value = "0")]
    age: u32,

    /// male, female, or unknown
    #[arg(long, default_value = "unknown")]
    sex: String,

    /// Daily calorie target in kcal (0 = configured default)
    #[arg(long, default_value = "0")]
    calorie_target: f64,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Assess a single food item
    Assess {
        /// JSON object of nutrient code to quantity
        #[arg(long)]
        profile: PathBuf,

        #[command(flatten)]
        eater: EaterArgs,

        /// Human label of the item
        #[arg(long, default_value = "")]
        label: String,

        /// Item is a drink
        #[arg(long)]
        beverage: bool,

        /// Serving weight in grams
        #[arg(long)]
        serving_weight: Option<f64>,
    },

    /// Evaluate and log every item of a meal
    Meal {
        /// JSON array of `{label, profile, is_beverage?, serving_weight_g?}`
        #[arg(long)]
        items: PathBuf,

        #[command(flatten)]
        eater: EaterArgs,

        /// Meal date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Averages and safety score over a date range
    Summary {
        /// JSON array of daily totals
        #[arg(long)]
        totals: PathBuf,

        /// JSON goal profile (absent = all-zero goal)
        #[arg(long)]
        goal: Option<PathBuf>,

        /// First day, YYYY-MM-DD (default: first day of the current month)
        #[arg(long)]
        from: Option<String>,

        /// Last day, YYYY-MM-DD (default: last day of the current month)
        #[arg(long)]
        to: Option<String>,

        /// Count days without data as zero consumption
        #[arg(long)]
        include_missing_days: bool,

        #[command(flatten)]
        counts: commands::progress::SafetyCounts,
    },

    /// Seven-day overview of one week
    Weekly {
        /// JSON array of daily totals
        #[arg(long)]
        totals: PathBuf,

        /// JSON goal profile (absent = all-zero goal)
        #[arg(long)]
        goal: Option<PathBuf>,

        /// Any day of the week, YYYY-MM-DD (default: today)
        #[arg(long)]
        week_start: Option<String>,

        /// `chart` or `detailed`
        #[arg(long, default_value = "chart")]
        mode: String,
    },

    /// Smoothed safety score for item counts
    Score {
        #[command(flatten)]
        counts: commands::progress::SafetyCounts,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = IntelligenceConfig::global();
    debug!("Loaded intelligence configuration");

    match cli.command {
        Command::Assess {
            profile,
            eater,
            label,
            beverage,
            serving_weight,
        } => commands::assess::assess(
            config,
            &profile,
            eater.into(),
            &label,
            beverage,
            serving_weight,
        ),
        Command::Meal { items, eater, date } => {
            commands::assess::meal(config, &items, eater.into(), date.as_deref()).await
        }
        Command::Summary {
            totals,
            goal,
            from,
            to,
            include_missing_days,
            counts,
        } => commands::progress::summary(
            config,
            &totals,
            goal.as_deref(),
            from.as_deref(),
            to.as_deref(),
            include_missing_days,
            counts,
        ),
        Command::Weekly {
            totals,
            goal,
            week_start,
            mode,
        } => commands::progress::weekly(
            config,
            &totals,
            goal.as_deref(),
            week_start.as_deref(),
            &mode,
        ),
        Command::Score { counts } => commands::progress::score(config, counts),
    }
}

impl From<EaterArgs> for EaterProfile {
    fn from(args: EaterArgs) -> Self {
        Self {
            age_years: args.age,
            sex: Sex::from_str_lossy(&args.sex),
            calorie_target: args.calorie_target,
        }
    }
}
