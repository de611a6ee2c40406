// ABOUTME: Shared test utilities and fixtures for NutriGuard integration tests
// ABOUTME: Quiet tracing setup, date helpers, profile builders, alert sinks and a read-only store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriguard`

use async_trait::async_trait;
use chrono::NaiveDate;
use nutriguard::errors::{AppError, AppResult};
use nutriguard::intelligence::DateRange;
use nutriguard::models::{DailyNutrientTotals, GoalProfile, NutrientProfile};
use nutriguard::services::alerts::{AlertSink, SafetyAlert};
use nutriguard::services::store::{InMemoryNutritionStore, LoggedItemRecord, NutritionStore};
use std::env;
use std::sync::Once;
use tokio::sync::Mutex;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day in March 2025
pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

/// Profile from `(code, quantity)` pairs
pub fn profile(pairs: &[(&str, f64)]) -> NutrientProfile {
    NutrientProfile::try_from_pairs(pairs.iter().map(|(key, value)| (*key, *value))).unwrap()
}

/// Typical adult goal used across analytics tests
pub fn adult_goal() -> GoalProfile {
    GoalProfile {
        calories: 2000.0,
        protein: 100.0,
        carbs: 250.0,
        fat: 70.0,
        sodium: 2300.0,
        sugar: 50.0,
        hydration: 8.0,
        exercise: 30.0,
    }
}

/// Day with the given calories and protein, everything else zero
pub fn day_totals(date: NaiveDate, calories: f64, protein: f64) -> DailyNutrientTotals {
    DailyNutrientTotals {
        calories,
        protein,
        ..DailyNutrientTotals::empty(date)
    }
}

/// Alert sink that keeps every alert it receives
#[derive(Default)]
pub struct RecordingAlertSink {
    alerts: Mutex<Vec<SafetyAlert>>,
}

impl RecordingAlertSink {
    /// Alerts received so far
    pub async fn alerts(&self) -> Vec<SafetyAlert> {
        self.alerts.lock().await.clone()
    }
}

#[async_trait]
impl AlertSink for RecordingAlertSink {
    async fn emit(&self, alert: SafetyAlert) -> AppResult<()> {
        self.alerts.lock().await.push(alert);
        Ok(())
    }
}

/// Alert sink whose channel is down
pub struct FailingAlertSink;

#[async_trait]
impl AlertSink for FailingAlertSink {
    async fn emit(&self, _alert: SafetyAlert) -> AppResult<()> {
        Err(AppError::external_service("push", "channel unavailable"))
    }
}

/// Store whose reads succeed and whose writes fail, like a replica that lost its primary
#[derive(Default)]
pub struct ReadOnlyNutritionStore {
    inner: InMemoryNutritionStore,
}

impl ReadOnlyNutritionStore {
    fn rejected(operation: &str) -> AppError {
        AppError::database(format!("{operation}: store is read-only"))
    }
}

#[async_trait]
impl NutritionStore for ReadOnlyNutritionStore {
    async fn get_goal(&self, user_id: Uuid) -> AppResult<Option<GoalProfile>> {
        self.inner.get_goal(user_id).await
    }

    async fn put_goal(&self, _user_id: Uuid, _goal: GoalProfile) -> AppResult<()> {
        Err(Self::rejected("put_goal"))
    }

    async fn daily_totals(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<DailyNutrientTotals>> {
        self.inner.daily_totals(user_id, range).await
    }

    async fn put_daily_totals(
        &self,
        _user_id: Uuid,
        _totals: DailyNutrientTotals,
    ) -> AppResult<()> {
        Err(Self::rejected("put_daily_totals"))
    }

    async fn save_items(&self, _user_id: Uuid, _items: Vec<LoggedItemRecord>) -> AppResult<()> {
        Err(Self::rejected("save_items"))
    }

    async fn items_in_range(
        &self,
        user_id: Uuid,
        range: DateRange,
    ) -> AppResult<Vec<LoggedItemRecord>> {
        self.inner.items_in_range(user_id, range).await
    }

    async fn meal_items(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<Vec<LoggedItemRecord>> {
        self.inner.meal_items(user_id, meal_id).await
    }
}
