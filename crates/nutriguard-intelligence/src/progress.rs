// ABOUTME: Goal-relative progress aggregation over per-day nutrient totals
// ABOUTME: Range summaries, weekly chart/detailed views, single-day view, and the capped today view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progress Aggregator
//!
//! Two percent conventions coexist on purpose:
//!
//! - Range, weekly and single-day views are uncapped: a day at 150% of its calorie goal
//!   reports 150. A zero goal yields 0 when nothing was consumed and 100 otherwise.
//! - The today view ([`ProgressAggregator::goal_progress`]) answers "did I hit the goal":
//!   it caps at 100 and a zero goal yields 0.

use crate::config::SafetyScoreConfig;
use crate::constants::units;
use crate::date_window::{week_start, DateRange};
use crate::errors::{AppError, AppResult};
use crate::math::{capped_percent_of_goal, percent_of_goal, round2};
use crate::models::{DailyNutrientTotals, GoalProfile, SafetyBreakdown};
use crate::safety_score::compute_safety_score;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ============================================================================
// Tracked nutrients
// ============================================================================

/// Reporting group of a tracked nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientGroup {
    /// Energy and macronutrients
    Macros,
    /// Sodium and sugar
    Micros,
    /// Hydration and exercise
    Other,
}

/// The eight daily metrics compared against goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedNutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
    /// Sodium (mg)
    Sodium,
    /// Sugar (g)
    Sugar,
    /// Water (glasses)
    Hydration,
    /// Exercise (minutes)
    Exercise,
}

impl TrackedNutrient {
    /// All tracked nutrients in reporting order
    pub const ALL: [Self; 8] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Sodium,
        Self::Sugar,
        Self::Hydration,
        Self::Exercise,
    ];

    /// Amount consumed on a day
    #[must_use]
    pub const fn consumed(self, totals: &DailyNutrientTotals) -> f64 {
        match self {
            Self::Calories => totals.calories,
            Self::Protein => totals.protein,
            Self::Carbs => totals.carbs,
            Self::Fat => totals.fat,
            Self::Sodium => totals.sodium,
            Self::Sugar => totals.sugar,
            Self::Hydration => totals.hydration,
            Self::Exercise => totals.exercise,
        }
    }

    /// Daily target
    #[must_use]
    pub const fn goal(self, goal: &GoalProfile) -> f64 {
        match self {
            Self::Calories => goal.calories,
            Self::Protein => goal.protein,
            Self::Carbs => goal.carbs,
            Self::Fat => goal.fat,
            Self::Sodium => goal.sodium,
            Self::Sugar => goal.sugar,
            Self::Hydration => goal.hydration,
            Self::Exercise => goal.exercise,
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => units::KCAL,
            Self::Protein | Self::Carbs | Self::Fat | Self::Sugar => units::GRAMS,
            Self::Sodium => units::MILLIGRAMS,
            Self::Hydration => units::GLASSES,
            Self::Exercise => units::MINUTES,
        }
    }

    /// Reporting group in range summaries
    #[must_use]
    pub const fn group(self) -> NutrientGroup {
        match self {
            Self::Calories | Self::Protein | Self::Carbs | Self::Fat => NutrientGroup::Macros,
            Self::Sodium | Self::Sugar => NutrientGroup::Micros,
            Self::Hydration | Self::Exercise => NutrientGroup::Other,
        }
    }

    /// Key used in range summaries and the today view
    #[must_use]
    pub const fn summary_key(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::Sodium => "sodium",
            Self::Sugar => "sugar",
            Self::Hydration => "hydration",
            Self::Exercise => "exercise",
        }
    }

    /// Key used in weekly chart mode
    #[must_use]
    pub const fn chart_key(self) -> &'static str {
        match self {
            Self::Carbs => "carbohydrates",
            other => other.summary_key(),
        }
    }

    /// Key used in detailed day views
    #[must_use]
    pub const fn detailed_key(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein_g",
            Self::Carbs => "carbs_g",
            Self::Fat => "fat_g",
            Self::Sodium => "sodium_mg",
            Self::Sugar => "sugar_g",
            Self::Hydration => "hydration",
            Self::Exercise => "exercise_minute",
        }
    }
}

// ============================================================================
// View types
// ============================================================================

/// Weekly overview presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverviewMode {
    /// Percent per nutrient only
    Chart,
    /// Actual, target and percent per nutrient
    Detailed,
}

impl FromStr for OverviewMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chart" => Ok(Self::Chart),
            "detailed" => Ok(Self::Detailed),
            other => Err(AppError::invalid_input(format!(
                "Invalid mode '{other}', expected 'chart' or 'detailed'"
            ))),
        }
    }
}

impl fmt::Display for OverviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chart => "chart",
            Self::Detailed => "detailed",
        })
    }
}

/// Averages of one nutrient over a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAverage {
    /// Average amount consumed per counted day
    pub avg_consumed: f64,
    /// Average daily goal per counted day
    pub avg_goal: f64,
    /// Average of the per-day uncapped percents
    pub avg_percent: f64,
    /// Display unit
    pub unit: String,
}

/// Safety section of a range summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetySummary {
    /// Smoothed safe-item percentage
    pub score_pct: f64,
    /// Items logged in the range
    pub total_items: u64,
    /// Items marked safe
    pub safe_items: u64,
    /// Items marked unsafe
    pub unsafe_items: u64,
    /// Items without a determination
    pub unknown_items: u64,
}

/// How the averages were computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    /// Denominator used for every average
    pub days_counted: u32,
    /// Whether days without a record counted as zero-consumption days
    pub include_missing_days: bool,
}

/// Range-level statistical summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSummary {
    /// Summarized range
    pub range: DateRange,
    /// Calories, protein, carbs, fat
    pub macros: BTreeMap<String, NutrientAverage>,
    /// Sodium, sugar
    pub micros: BTreeMap<String, NutrientAverage>,
    /// Hydration, exercise
    pub other: BTreeMap<String, NutrientAverage>,
    /// Item safety over the range
    pub safety: SafetySummary,
    /// Averaging details
    pub metadata: SummaryMetadata,
}

impl RangeSummary {
    /// Averages of one nutrient
    #[must_use]
    pub fn nutrient(&self, nutrient: TrackedNutrient) -> Option<&NutrientAverage> {
        let group = match nutrient.group() {
            NutrientGroup::Macros => &self.macros,
            NutrientGroup::Micros => &self.micros,
            NutrientGroup::Other => &self.other,
        };
        group.get(nutrient.summary_key())
    }
}

/// Actual, target and uncapped percent of one nutrient on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricProgress {
    /// Amount consumed
    pub actual: f64,
    /// Daily goal
    pub target: f64,
    /// Uncapped percent of goal
    pub percent: f64,
}

/// Percent-only entry of a weekly chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayChart {
    /// Calendar day
    pub date: NaiveDate,
    /// Uncapped percent keyed by chart key
    pub percentages: BTreeMap<String, f64>,
}

/// Full detail of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDetailed {
    /// Calendar day
    pub date: NaiveDate,
    /// Progress keyed by detailed key
    pub metrics: BTreeMap<String, MetricProgress>,
}

/// Seven day entries in the requested mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeekDays {
    /// Chart mode entries
    Chart(Vec<DayChart>),
    /// Detailed mode entries
    Detailed(Vec<DayDetailed>),
}

impl WeekDays {
    /// Number of day entries
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Chart(days) => days.len(),
            Self::Detailed(days) => days.len(),
        }
    }

    /// Whether there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Monday-to-Sunday overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekView {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Presentation mode
    pub mode: OverviewMode,
    /// Seven entries, Monday first
    pub days: WeekDays,
}

/// Capped progress of one nutrient today
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Amount consumed
    pub consumed: f64,
    /// Daily goal
    pub goal: f64,
    /// Percent of goal capped at 100, 0 for a zero goal
    pub percent: f64,
}

/// The "did I hit my goals" view for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayProgress {
    /// Calendar day
    pub date: NaiveDate,
    /// Progress keyed by summary key
    pub nutrients: BTreeMap<String, GoalProgress>,
}

// ============================================================================
// Aggregator
// ============================================================================

/// Combines daily totals with a goal snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressAggregator {
    score_config: SafetyScoreConfig,
}

impl ProgressAggregator {
    /// Create an aggregator with the given safety score smoothing
    #[must_use]
    pub const fn new(score_config: SafetyScoreConfig) -> Self {
        Self { score_config }
    }

    /// Averages and safety score over a date range
    ///
    /// Rows outside the range are ignored and the last row for a duplicated date wins.
    /// With `include_missing_days` every calendar day in the range is counted, absent days
    /// as zero consumption; otherwise only days with a row are counted.
    #[must_use]
    pub fn summarize(
        &self,
        daily_totals: &[DailyNutrientTotals],
        goal: &GoalProfile,
        range: DateRange,
        include_missing_days: bool,
        breakdown: &SafetyBreakdown,
    ) -> RangeSummary {
        let by_day = index_by_day(daily_totals, |date| range.contains(date));
        let counted: Vec<DailyNutrientTotals> = if include_missing_days {
            range
                .days()
                .map(|date| totals_or_empty(&by_day, date))
                .collect()
        } else {
            by_day.values().copied().collect()
        };

        let mut macros = BTreeMap::new();
        let mut micros = BTreeMap::new();
        let mut other = BTreeMap::new();
        for nutrient in TrackedNutrient::ALL {
            let average = average_nutrient(nutrient, &counted, goal);
            let group = match nutrient.group() {
                NutrientGroup::Macros => &mut macros,
                NutrientGroup::Micros => &mut micros,
                NutrientGroup::Other => &mut other,
            };
            group.insert(nutrient.summary_key().to_owned(), average);
        }

        let days_counted = u32::try_from(counted.len()).unwrap_or(u32::MAX);
        debug!(
            from = %range.from,
            to = %range.to,
            days_counted,
            include_missing_days,
            "Summarized nutrition range"
        );

        RangeSummary {
            range,
            macros,
            micros,
            other,
            safety: SafetySummary {
                score_pct: compute_safety_score(breakdown, &self.score_config),
                total_items: breakdown.total,
                safe_items: breakdown.safe,
                unsafe_items: breakdown.unsafe_count,
                unknown_items: breakdown.unknown,
            },
            metadata: SummaryMetadata {
                days_counted,
                include_missing_days,
            },
        }
    }

    /// Uncapped actual/target/percent for one day
    #[must_use]
    pub fn day_view(&self, totals: &DailyNutrientTotals, goal: &GoalProfile) -> DayDetailed {
        let metrics = TrackedNutrient::ALL
            .iter()
            .map(|nutrient| {
                let actual = nutrient.consumed(totals);
                let target = nutrient.goal(goal);
                (
                    nutrient.detailed_key().to_owned(),
                    MetricProgress {
                        actual: round2(actual),
                        target: round2(target),
                        percent: round2(percent_of_goal(actual, target)),
                    },
                )
            })
            .collect();

        DayDetailed {
            date: totals.date,
            metrics,
        }
    }

    /// Seven-day overview of the Monday-start week containing `reference_date`
    #[must_use]
    pub fn weekly_overview(
        &self,
        daily_totals: &[DailyNutrientTotals],
        goal: &GoalProfile,
        reference_date: NaiveDate,
        mode: OverviewMode,
    ) -> WeekView {
        let start = week_start(reference_date);
        let end = start + Duration::days(6);
        let by_day = index_by_day(daily_totals, |date| start <= date && date <= end);
        let week = (0..7).map(|offset| totals_or_empty(&by_day, start + Duration::days(offset)));

        let days = match mode {
            OverviewMode::Chart => WeekDays::Chart(
                week.map(|totals| Self::day_chart(&totals, goal))
                    .collect(),
            ),
            OverviewMode::Detailed => WeekDays::Detailed(
                week.map(|totals| self.day_view(&totals, goal))
                    .collect(),
            ),
        };

        WeekView {
            week_start: start,
            mode,
            days,
        }
    }

    /// Capped "did I hit my goals" view for one day
    #[must_use]
    pub fn goal_progress(&self, totals: &DailyNutrientTotals, goal: &GoalProfile) -> TodayProgress {
        let nutrients = TrackedNutrient::ALL
            .iter()
            .map(|nutrient| {
                let consumed = nutrient.consumed(totals);
                let target = nutrient.goal(goal);
                (
                    nutrient.summary_key().to_owned(),
                    GoalProgress {
                        consumed: round2(consumed),
                        goal: round2(target),
                        percent: round2(capped_percent_of_goal(consumed, target)),
                    },
                )
            })
            .collect();

        TodayProgress {
            date: totals.date,
            nutrients,
        }
    }

    fn day_chart(totals: &DailyNutrientTotals, goal: &GoalProfile) -> DayChart {
        let percentages = TrackedNutrient::ALL
            .iter()
            .map(|nutrient| {
                let percent = percent_of_goal(nutrient.consumed(totals), nutrient.goal(goal));
                (nutrient.chart_key().to_owned(), round2(percent))
            })
            .collect();

        DayChart {
            date: totals.date,
            percentages,
        }
    }
}

/// Parse a weekly overview mode, rejecting anything but `chart` or `detailed`
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown mode
pub fn parse_mode(mode: &str) -> AppResult<OverviewMode> {
    mode.parse()
}

fn index_by_day<F>(
    daily_totals: &[DailyNutrientTotals],
    keep: F,
) -> BTreeMap<NaiveDate, DailyNutrientTotals>
where
    F: Fn(NaiveDate) -> bool,
{
    daily_totals
        .iter()
        .filter(|totals| keep(totals.date))
        .map(|totals| (totals.date, *totals))
        .collect()
}

fn totals_or_empty(
    by_day: &BTreeMap<NaiveDate, DailyNutrientTotals>,
    date: NaiveDate,
) -> DailyNutrientTotals {
    by_day
        .get(&date)
        .copied()
        .unwrap_or_else(|| DailyNutrientTotals::empty(date))
}

fn average_nutrient(
    nutrient: TrackedNutrient,
    days: &[DailyNutrientTotals],
    goal: &GoalProfile,
) -> NutrientAverage {
    let unit = nutrient.unit().to_owned();
    if days.is_empty() {
        return NutrientAverage {
            avg_consumed: 0.0,
            avg_goal: 0.0,
            avg_percent: 0.0,
            unit,
        };
    }

    let target = nutrient.goal(goal);
    let (consumed_sum, percent_sum) = days.iter().fold((0.0, 0.0), |(consumed, percent), day| {
        let amount = nutrient.consumed(day);
        (consumed + amount, percent + percent_of_goal(amount, target))
    });
    let count = days.len() as f64;

    NutrientAverage {
        avg_consumed: round2(consumed_sum / count),
        avg_goal: round2(target),
        avg_percent: round2(percent_sum / count),
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        // March 2025: the 10th is a Monday
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn totals(d: u32, calories: f64) -> DailyNutrientTotals {
        DailyNutrientTotals {
            calories,
            ..DailyNutrientTotals::empty(day(d))
        }
    }

    fn calorie_goal(calories: f64) -> GoalProfile {
        GoalProfile {
            calories,
            ..GoalProfile::default()
        }
    }

    #[test]
    fn test_day_view_goal_zero_rule() {
        let aggregator = ProgressAggregator::default();
        let goal = GoalProfile::default();

        let nothing = aggregator.day_view(&totals(10, 0.0), &goal);
        assert!(nothing.metrics["calories"].percent.abs() < f64::EPSILON);

        let something = aggregator.day_view(&totals(10, 500.0), &goal);
        assert!((something.metrics["calories"].percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uncapped_and_capped_views_side_by_side() {
        let aggregator = ProgressAggregator::default();
        let goal = calorie_goal(2000.0);
        let over = totals(10, 3000.0);

        let detailed = aggregator.day_view(&over, &goal);
        assert!((detailed.metrics["calories"].percent - 150.0).abs() < f64::EPSILON);

        let today = aggregator.goal_progress(&over, &goal);
        assert!((today.nutrients["calories"].percent - 100.0).abs() < f64::EPSILON);

        // Zero goal: uncapped view says 100, today view says 0
        assert!((detailed.metrics["protein_g"].percent).abs() < f64::EPSILON);
        let eaten = DailyNutrientTotals {
            protein: 30.0,
            ..over
        };
        assert!((aggregator.day_view(&eaten, &goal).metrics["protein_g"].percent - 100.0).abs() < f64::EPSILON);
        assert!(aggregator.goal_progress(&eaten, &goal).nutrients["protein"].percent.abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_denominator_follows_missing_day_policy() {
        let aggregator = ProgressAggregator::default();
        let range = DateRange::new(day(10), day(16)).unwrap();
        let rows = [totals(10, 300.0), totals(12, 600.0), totals(14, 900.0)];
        let goal = calorie_goal(1000.0);
        let breakdown = SafetyBreakdown::default();

        let present = aggregator.summarize(&rows, &goal, range, false, &breakdown);
        assert_eq!(present.metadata.days_counted, 3);
        let calories = present.nutrient(TrackedNutrient::Calories).unwrap();
        assert!((calories.avg_consumed - 600.0).abs() < f64::EPSILON);
        assert!((calories.avg_percent - 60.0).abs() < f64::EPSILON);
        assert!((calories.avg_goal - 1000.0).abs() < f64::EPSILON);

        let all = aggregator.summarize(&rows, &goal, range, true, &breakdown);
        assert_eq!(all.metadata.days_counted, 7);
        let calories = all.nutrient(TrackedNutrient::Calories).unwrap();
        assert!((calories.avg_consumed - 257.14).abs() < f64::EPSILON);
        assert!((calories.avg_percent - 25.71).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_ignores_out_of_range_and_keeps_last_duplicate() {
        let aggregator = ProgressAggregator::default();
        let range = DateRange::new(day(10), day(11)).unwrap();
        let rows = [totals(9, 5000.0), totals(10, 100.0), totals(10, 400.0)];

        let summary = aggregator.summarize(
            &rows,
            &GoalProfile::default(),
            range,
            false,
            &SafetyBreakdown::default(),
        );
        assert_eq!(summary.metadata.days_counted, 1);
        let calories = summary.nutrient(TrackedNutrient::Calories).unwrap();
        assert!((calories.avg_consumed - 400.0).abs() < f64::EPSILON);
        assert!((calories.avg_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_with_no_days_is_all_zero() {
        let aggregator = ProgressAggregator::default();
        let range = DateRange::new(day(10), day(16)).unwrap();
        let summary = aggregator.summarize(
            &[],
            &calorie_goal(2000.0),
            range,
            false,
            &SafetyBreakdown::default(),
        );

        assert_eq!(summary.metadata.days_counted, 0);
        for nutrient in TrackedNutrient::ALL {
            let average = summary.nutrient(nutrient).unwrap();
            assert!(average.avg_consumed.abs() < f64::EPSILON);
            assert!(average.avg_goal.abs() < f64::EPSILON);
            assert!(average.avg_percent.abs() < f64::EPSILON);
        }
        assert!((summary.safety.score_pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_groups_units_and_safety() {
        let aggregator = ProgressAggregator::default();
        let range = DateRange::new(day(10), day(10)).unwrap();
        let summary = aggregator.summarize(
            &[totals(10, 100.0)],
            &GoalProfile::default(),
            range,
            true,
            &SafetyBreakdown::new(9, 1, 0),
        );

        assert_eq!(summary.macros.len(), 4);
        assert_eq!(summary.micros.len(), 2);
        assert_eq!(summary.other.len(), 2);
        assert_eq!(summary.micros["sodium"].unit, "mg");
        assert_eq!(summary.other["hydration"].unit, "glasses");
        assert_eq!(summary.other["exercise"].unit, "minutes");
        assert!((summary.safety.score_pct - 83.33).abs() < f64::EPSILON);
        assert_eq!(summary.safety.total_items, 10);
    }

    #[test]
    fn test_weekly_chart_fills_missing_days() {
        let aggregator = ProgressAggregator::default();
        let rows = [totals(12, 1000.0), totals(17, 9999.0)];
        let view = aggregator.weekly_overview(&rows, &calorie_goal(2000.0), day(16), OverviewMode::Chart);

        assert_eq!(view.week_start, day(10));
        let WeekDays::Chart(days) = &view.days else {
            panic!("expected chart entries");
        };
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, day(10));
        assert_eq!(days[6].date, day(16));
        assert!((days[2].percentages["calories"] - 50.0).abs() < f64::EPSILON);
        assert!(days[0].percentages["calories"].abs() < f64::EPSILON);
        let keys: Vec<&str> = days[0].percentages.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["calories", "carbohydrates", "exercise", "fat", "hydration", "protein", "sodium", "sugar"]
        );
    }

    #[test]
    fn test_weekly_detailed_keys() {
        let aggregator = ProgressAggregator::default();
        let view = aggregator.weekly_overview(&[], &GoalProfile::default(), day(10), OverviewMode::Detailed);
        let WeekDays::Detailed(days) = &view.days else {
            panic!("expected detailed entries");
        };
        assert_eq!(days.len(), 7);
        for key in [
            "calories",
            "protein_g",
            "carbs_g",
            "fat_g",
            "sodium_mg",
            "sugar_g",
            "hydration",
            "exercise_minute",
        ] {
            assert!(days[3].metrics.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(parse_mode("chart").unwrap(), OverviewMode::Chart);
        assert_eq!(parse_mode("Detailed").unwrap(), OverviewMode::Detailed);
        assert!(parse_mode("table").is_err());
    }
}
