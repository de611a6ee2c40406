// ABOUTME: Persistence seam for nutrition goals, daily totals, and logged item safety records
// ABOUTME: NutritionStore trait plus an in-memory implementation backed by tokio RwLock maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::intelligence::DateRange;
use crate::models::{DailyNutrientTotals, GoalProfile, ItemNutrients, ItemSafetyRecord};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One logged item as persisted: its verdict plus the tracked nutrient sums
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedItemRecord {
    /// Meal the item belongs to
    pub meal_id: Uuid,
    /// Local calendar day the item was logged on
    pub date: NaiveDate,
    /// Safety verdict
    pub record: ItemSafetyRecord,
    /// Tracked nutrients contributed to the day's totals
    pub nutrients: ItemNutrients,
}

/// Storage for everything the analytics and meal services read or write
///
/// Goal and daily totals are single records overwritten on write; item records are
/// append-only.
#[async_trait]
pub trait NutritionStore: Send + Sync {
    /// Current goal snapshot for a user, if one was ever set
    async fn get_goal(&self, user_id: Uuid) -> AppResult<Option<GoalProfile>>;

    /// Replace a user's goal
    async fn put_goal(&self, user_id: Uuid, goal: GoalProfile) -> AppResult<()>;

    /// Daily totals rows inside `range`, ordered by date
    async fn daily_totals(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<DailyNutrientTotals>>;

    /// Replace the totals row for `totals.date`
    async fn put_daily_totals(&self, user_id: Uuid, totals: DailyNutrientTotals)
        -> AppResult<()>;

    /// Append the items of one meal in a single write; either all are stored or none
    async fn save_items(&self, user_id: Uuid, items: Vec<LoggedItemRecord>) -> AppResult<()>;

    /// Items logged on days inside `range`, in insertion order
    async fn items_in_range(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<LoggedItemRecord>>;

    /// Items of one meal, in insertion order
    async fn meal_items(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<Vec<LoggedItemRecord>>;
}

/// Process-local store for tests and the CLI
#[derive(Debug, Default)]
pub struct InMemoryNutritionStore {
    goals: RwLock<HashMap<Uuid, GoalProfile>>,
    totals: RwLock<HashMap<(Uuid, NaiveDate), DailyNutrientTotals>>,
    items: RwLock<HashMap<Uuid, Vec<LoggedItemRecord>>>,
}

impl InMemoryNutritionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NutritionStore for InMemoryNutritionStore {
    async fn get_goal(&self, user_id: Uuid) -> AppResult<Option<GoalProfile>> {
        Ok(self.goals.read().await.get(&user_id).copied())
    }

    async fn put_goal(&self, user_id: Uuid, goal: GoalProfile) -> AppResult<()> {
        self.goals.write().await.insert(user_id, goal);
        Ok(())
    }

    async fn daily_totals(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<DailyNutrientTotals>> {
        let totals = self.totals.read().await;
        let mut rows: Vec<DailyNutrientTotals> = totals
            .iter()
            .filter(|((owner, date), _)| *owner == user_id && range.contains(*date))
            .map(|(_, row)| *row)
            .collect();
        rows.sort_by_key(|row| row.date);
        Ok(rows)
    }

    async fn put_daily_totals(
        &self,
        user_id: Uuid,
        totals: DailyNutrientTotals,
    ) -> AppResult<()> {
        self.totals
            .write()
            .await
            .insert((user_id, totals.date), totals);
        Ok(())
    }

    async fn save_items(&self, user_id: Uuid, items: Vec<LoggedItemRecord>) -> AppResult<()> {
        self.items.write().await.entry(user_id).or_default().extend(items);
        Ok(())
    }

    async fn items_in_range(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<LoggedItemRecord>> {
        Ok(self
            .items
            .read()
            .await
            .get(&user_id)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| range.contains(item.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn meal_items(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<Vec<LoggedItemRecord>> {
        Ok(self
            .items
            .read()
            .await
            .get(&user_id)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.meal_id == meal_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[tokio::test]
    async fn test_daily_totals_overwrite_and_range_filter() {
        let store = InMemoryNutritionStore::new();
        let user = Uuid::new_v4();

        let mut first = DailyNutrientTotals::empty(day(3));
        first.calories = 1000.0;
        store.put_daily_totals(user, first).await.unwrap();
        first.calories = 1500.0;
        store.put_daily_totals(user, first).await.unwrap();
        store
            .put_daily_totals(user, DailyNutrientTotals::empty(day(20)))
            .await
            .unwrap();

        let range = DateRange::new(day(1), day(7)).unwrap();
        let rows = store.daily_totals(user, range).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].calories - 1500.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_missing_goal_is_none() {
        let store = InMemoryNutritionStore::new();
        assert!(store.get_goal(Uuid::new_v4()).await.unwrap().is_none());
    }
}
