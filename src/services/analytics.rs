// ABOUTME: Nutrition analytics service: range summary, weekly overview, and today progress
// ABOUTME: Resolves default date windows, reads the store, and delegates to ProgressAggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::store::NutritionStore;
use crate::errors::{AppError, AppResult};
use crate::intelligence::date_window::parse_day;
use crate::intelligence::progress::{parse_mode, TodayProgress};
use crate::intelligence::{DateRange, ProgressAggregator, RangeSummary, SafetyScoreConfig, WeekView};
use crate::logging::AppLogger;
use crate::models::{DailyNutrientTotals, GoalProfile, SafetyBreakdown};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

/// Query parameters of the range summary; absent bounds fall back to the current month
#[derive(Debug, Clone, Default)]
pub struct SummaryQuery {
    /// First day, `YYYY-MM-DD`
    pub from: Option<String>,
    /// Last day, `YYYY-MM-DD`
    pub to: Option<String>,
    /// Count every calendar day in the range, absent days as zero
    pub include_missing_days: bool,
}

/// Read-side analytics over a user's stored totals and item verdicts
pub struct AnalyticsService {
    store: Arc<dyn NutritionStore>,
    aggregator: ProgressAggregator,
}

impl AnalyticsService {
    /// Create the service over a store
    #[must_use]
    pub fn new(store: Arc<dyn NutritionStore>, score_config: SafetyScoreConfig) -> Self {
        Self {
            store,
            aggregator: ProgressAggregator::new(score_config),
        }
    }

    /// Averages and safety score over a date range
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for an unparsable date, `InvalidInput` when `to < from`, or
    /// the store's error
    pub async fn summary(
        &self,
        user_id: Uuid,
        query: &SummaryQuery,
        today: NaiveDate,
    ) -> AppResult<RangeSummary> {
        let range = resolve_range(
            query.from.as_deref(),
            query.to.as_deref(),
            DateRange::current_month(today),
        )?;
        AppLogger::log_analytics_request(
            user_id,
            "summary",
            &range.from.to_string(),
            &range.to.to_string(),
        );

        let goal = self.goal_or_zero(user_id).await?;
        let totals = self.totals_in(user_id, range).await?;
        let items = self
            .store
            .items_in_range(user_id, range)
            .await
            .inspect_err(|e| {
                AppLogger::log_collaborator_failure("nutrition_store", "items_in_range", &e.to_string());
            })?;
        let breakdown = SafetyBreakdown::from_records(items.iter().map(|item| &item.record));

        Ok(self
            .aggregator
            .summarize(&totals, &goal, range, query.include_missing_days, &breakdown))
    }

    /// Seven-day view of the week containing `week_start` (default: the week of `today`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a mode other than `chart` or `detailed`, `InvalidFormat`
    /// for an unparsable date, or the store's error
    pub async fn weekly_overview(
        &self,
        user_id: Uuid,
        week_start: Option<&str>,
        mode: &str,
        today: NaiveDate,
    ) -> AppResult<WeekView> {
        let mode = parse_mode(mode)?;
        let reference = week_start.map(parse_day).transpose()?.unwrap_or(today);
        let range = DateRange::current_week(reference);
        AppLogger::log_analytics_request(
            user_id,
            "weekly_overview",
            &range.from.to_string(),
            &range.to.to_string(),
        );

        let goal = self.goal_or_zero(user_id).await?;
        let totals = self.totals_in(user_id, range).await?;
        Ok(self
            .aggregator
            .weekly_overview(&totals, &goal, reference, mode))
    }

    /// Capped goal progress for a single day
    ///
    /// # Errors
    ///
    /// Returns the store's error
    pub async fn today_progress(&self, user_id: Uuid, date: NaiveDate) -> AppResult<TodayProgress> {
        let range = DateRange::new(date, date)?;
        AppLogger::log_analytics_request(
            user_id,
            "today_progress",
            &date.to_string(),
            &date.to_string(),
        );

        let goal = self.goal_or_zero(user_id).await?;
        let totals = self
            .totals_in(user_id, range)
            .await?
            .pop()
            .unwrap_or_else(|| DailyNutrientTotals::empty(date));
        Ok(self.aggregator.goal_progress(&totals, &goal))
    }

    /// Replace a user's goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative or non-finite target, or the store's error
    pub async fn set_goal(&self, user_id: Uuid, goal: GoalProfile) -> AppResult<()> {
        let targets = [
            ("calories", goal.calories),
            ("protein", goal.protein),
            ("carbs", goal.carbs),
            ("fat", goal.fat),
            ("sodium", goal.sodium),
            ("sugar", goal.sugar),
            ("hydration", goal.hydration),
            ("exercise", goal.exercise),
        ];
        if let Some((name, value)) = targets
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(AppError::invalid_input(format!(
                "Goal {name} must be a non-negative number, got {value}"
            )));
        }
        self.store.put_goal(user_id, goal).await
    }

    /// Rebuild one day's totals from the items logged that day plus manual entries
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite hydration/exercise, or the store's
    /// error
    pub async fn recompute_daily_totals(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        hydration: f64,
        exercise: f64,
    ) -> AppResult<DailyNutrientTotals> {
        for (name, value) in [("hydration", hydration), ("exercise", exercise)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let range = DateRange::new(date, date)?;
        let items = self.store.items_in_range(user_id, range).await?;
        let nutrients: Vec<_> = items.iter().map(|item| item.nutrients).collect();
        let totals = DailyNutrientTotals::from_items(date, &nutrients, hydration, exercise);

        self.store.put_daily_totals(user_id, totals).await?;
        Ok(totals)
    }

    async fn goal_or_zero(&self, user_id: Uuid) -> AppResult<GoalProfile> {
        Ok(self
            .store
            .get_goal(user_id)
            .await
            .inspect_err(|e| {
                AppLogger::log_collaborator_failure("nutrition_store", "get_goal", &e.to_string());
            })?
            .unwrap_or_default())
    }

    async fn totals_in(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<DailyNutrientTotals>> {
        self.store
            .daily_totals(user_id, range)
            .await
            .inspect_err(|e| {
                AppLogger::log_collaborator_failure("nutrition_store", "daily_totals", &e.to_string());
            })
    }
}

/// Resolve optional `YYYY-MM-DD` bounds against a default window
///
/// # Errors
///
/// Returns `InvalidFormat` for an unparsable date or `InvalidInput` when `to < from`
pub fn resolve_range(
    from: Option<&str>,
    to: Option<&str>,
    default: DateRange,
) -> AppResult<DateRange> {
    let from = from.map(parse_day).transpose()?.unwrap_or(default.from);
    let to = to.map(parse_day).transpose()?.unwrap_or(default.to);
    DateRange::new(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn default_march() -> DateRange {
        DateRange::current_month(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn test_resolve_range_defaults_to_month() {
        let range = resolve_range(None, None, default_march()).unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn test_resolve_range_rejects_reversed_bounds() {
        let err = resolve_range(Some("2025-03-10"), Some("2025-03-01"), default_march()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_resolve_range_rejects_bad_format() {
        let err = resolve_range(Some("03/10/2025"), None, default_march()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
