// ABOUTME: Progress analytics commands for nutriguard-cli
// ABOUTME: Range summary, weekly overview, and safety score over JSON inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::json::{print_json, read_json, today};
use anyhow::Result;
use clap::Args;
use nutriguard::config::IntelligenceConfig;
use nutriguard::intelligence::date_window::parse_day;
use nutriguard::intelligence::progress::parse_mode;
use nutriguard::intelligence::{compute_safety_score, DateRange, ProgressAggregator};
use nutriguard::models::{DailyNutrientTotals, GoalProfile, SafetyBreakdown};
use nutriguard::services::analytics::resolve_range;
use serde_json::json;
use std::path::Path;

/// Item verdict counts for a period
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SafetyCounts {
    /// Items marked safe
    #[arg(long, default_value = "0")]
    pub safe: u64,

    /// Items marked unsafe with warnings
    #[arg(long = "unsafe", default_value = "0")]
    pub unsafe_count: u64,

    /// Items without a determination
    #[arg(long, default_value = "0")]
    pub unknown: u64,
}

impl SafetyCounts {
    const fn breakdown(self) -> SafetyBreakdown {
        SafetyBreakdown::new(self.safe, self.unsafe_count, self.unknown)
    }
}

fn load_goal(path: Option<&Path>) -> Result<GoalProfile> {
    path.map_or_else(|| Ok(GoalProfile::default()), read_json)
}

/// Print the range summary
pub fn summary(
    config: &IntelligenceConfig,
    totals_path: &Path,
    goal_path: Option<&Path>,
    from: Option<&str>,
    to: Option<&str>,
    include_missing_days: bool,
    counts: SafetyCounts,
) -> Result<()> {
    let range = resolve_range(from, to, DateRange::current_month(today()))?;
    let totals: Vec<DailyNutrientTotals> = read_json(totals_path)?;
    let goal = load_goal(goal_path)?;

    let summary = ProgressAggregator::new(config.safety_score).summarize(
        &totals,
        &goal,
        range,
        include_missing_days,
        &counts.breakdown(),
    );
    print_json(&summary)
}

/// Print the weekly overview
pub fn weekly(
    config: &IntelligenceConfig,
    totals_path: &Path,
    goal_path: Option<&Path>,
    week_start: Option<&str>,
    mode: &str,
) -> Result<()> {
    let mode = parse_mode(mode)?;
    let reference = week_start.map(parse_day).transpose()?.unwrap_or_else(today);
    let totals: Vec<DailyNutrientTotals> = read_json(totals_path)?;
    let goal = load_goal(goal_path)?;

    let view =
        ProgressAggregator::new(config.safety_score).weekly_overview(&totals, &goal, reference, mode);
    print_json(&view)
}

/// Print the smoothed safety score for the given counts
pub fn score(config: &IntelligenceConfig, counts: SafetyCounts) -> Result<()> {
    let breakdown = counts.breakdown();
    print_json(&json!({
        "score_pct": compute_safety_score(&breakdown, &config.safety_score),
        "breakdown": breakdown,
    }))
}
