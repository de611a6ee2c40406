// ABOUTME: Integration tests for the nutrition analytics service
// ABOUTME: Range summary denominators, weekly views, capped today view, and totals recompute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    adult_goal, day_totals, init_test_logging, march, profile, ReadOnlyNutritionStore,
    RecordingAlertSink,
};
use nutriguard::errors::ErrorCode;
use nutriguard::intelligence::progress::{TrackedNutrient, WeekDays};
use nutriguard::intelligence::{FoodSafetyConfig, OverviewMode, SafetyScoreConfig};
use nutriguard::models::GoalProfile;
use nutriguard::services::analytics::{AnalyticsService, SummaryQuery};
use nutriguard::services::meal_safety::{EaterProfile, MealItemInput, MealSafetyService};
use nutriguard::services::store::{InMemoryNutritionStore, NutritionStore};
use std::sync::Arc;
use uuid::Uuid;

async fn seeded_store(user: Uuid) -> Arc<InMemoryNutritionStore> {
    let store = Arc::new(InMemoryNutritionStore::new());
    store.put_goal(user, adult_goal()).await.unwrap();
    for (day, calories) in [(3, 1800.0), (4, 2000.0), (6, 2200.0)] {
        store
            .put_daily_totals(user, day_totals(march(day), calories, 120.0))
            .await
            .unwrap();
    }
    store
}

fn week_query(include_missing_days: bool) -> SummaryQuery {
    SummaryQuery {
        from: Some("2025-03-03".to_owned()),
        to: Some("2025-03-09".to_owned()),
        include_missing_days,
    }
}

#[tokio::test]
async fn test_summary_counts_only_logged_days_by_default() {
    init_test_logging();
    let user = Uuid::new_v4();
    let service = AnalyticsService::new(seeded_store(user).await, SafetyScoreConfig::default());

    let summary = service
        .summary(user, &week_query(false), march(15))
        .await
        .unwrap();

    assert_eq!(summary.metadata.days_counted, 3);
    let calories = summary.nutrient(TrackedNutrient::Calories).unwrap();
    assert!((calories.avg_consumed - 2000.0).abs() < f64::EPSILON);
    assert!((calories.avg_goal - 2000.0).abs() < f64::EPSILON);
    assert!((calories.avg_percent - 100.0).abs() < f64::EPSILON);

    // Protein is over target every day and stays uncapped
    let protein = summary.nutrient(TrackedNutrient::Protein).unwrap();
    assert!((protein.avg_percent - 120.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_summary_with_missing_days_uses_calendar_denominator() {
    init_test_logging();
    let user = Uuid::new_v4();
    let service = AnalyticsService::new(seeded_store(user).await, SafetyScoreConfig::default());

    let summary = service
        .summary(user, &week_query(true), march(15))
        .await
        .unwrap();

    assert_eq!(summary.metadata.days_counted, 7);
    let calories = summary.nutrient(TrackedNutrient::Calories).unwrap();
    assert!((calories.avg_consumed - 857.14).abs() < f64::EPSILON);
    assert!((calories.avg_percent - 42.86).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_summary_defaults_to_current_month_and_scores_items() {
    init_test_logging();
    let user = Uuid::new_v4();
    let store = seeded_store(user).await;
    let meals = MealSafetyService::new(
        store.clone(),
        Arc::new(RecordingAlertSink::default()),
        FoodSafetyConfig::default(),
    );
    let items = vec![
        MealItemInput {
            label: "frosted pastry".to_owned(),
            profile: profile(&[("ENERC_KCAL", 200.0), ("SUGAR.added", 25.0), ("NA", 900.0)]),
            is_beverage: false,
            serving_weight_g: None,
        },
        MealItemInput {
            label: "sparkling water".to_owned(),
            profile: profile(&[("NA", 10.0)]),
            is_beverage: true,
            serving_weight_g: None,
        },
    ];
    meals
        .log_meal(user, Uuid::new_v4(), march(4), EaterProfile::default(), &items)
        .await
        .unwrap();

    let service = AnalyticsService::new(store, SafetyScoreConfig::default());
    let summary = service
        .summary(user, &SummaryQuery::default(), march(15))
        .await
        .unwrap();

    assert_eq!(summary.range.from, march(1));
    assert_eq!(summary.range.to, march(31));
    assert_eq!(summary.safety.total_items, 2);
    assert_eq!(summary.safety.safe_items, 1);
    assert_eq!(summary.safety.unsafe_items, 1);
    // (1 + 1) / (2 + 2)
    assert!((summary.safety.score_pct - 50.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_summary_rejects_reversed_range() {
    init_test_logging();
    let service = AnalyticsService::new(
        Arc::new(InMemoryNutritionStore::new()),
        SafetyScoreConfig::default(),
    );
    let query = SummaryQuery {
        from: Some("2025-03-09".to_owned()),
        to: Some("2025-03-03".to_owned()),
        include_missing_days: false,
    };

    let err = service
        .summary(Uuid::new_v4(), &query, march(15))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_weekly_overview_modes() {
    init_test_logging();
    let user = Uuid::new_v4();
    let service = AnalyticsService::new(seeded_store(user).await, SafetyScoreConfig::default());

    let chart = service
        .weekly_overview(user, Some("2025-03-05"), "chart", march(15))
        .await
        .unwrap();
    assert_eq!(chart.week_start, march(3));
    assert_eq!(chart.mode, OverviewMode::Chart);
    let WeekDays::Chart(days) = &chart.days else {
        panic!("expected chart days");
    };
    assert_eq!(days.len(), 7);
    assert!((days[0].percentages["calories"] - 90.0).abs() < f64::EPSILON);
    assert!(days[1].percentages.contains_key("carbohydrates"));
    assert!(days[4].percentages["calories"].abs() < f64::EPSILON);

    let detailed = service
        .weekly_overview(user, Some("2025-03-05"), "detailed", march(15))
        .await
        .unwrap();
    let WeekDays::Detailed(days) = &detailed.days else {
        panic!("expected detailed days");
    };
    assert_eq!(days.len(), 7);
    let protein = &days[3].metrics["protein_g"];
    assert!((protein.actual - 120.0).abs() < f64::EPSILON);
    assert!((protein.percent - 120.0).abs() < f64::EPSILON);
    assert!(days[3].metrics.contains_key("exercise_minute"));
}

#[tokio::test]
async fn test_weekly_overview_rejects_unknown_mode() {
    init_test_logging();
    let service = AnalyticsService::new(
        Arc::new(InMemoryNutritionStore::new()),
        SafetyScoreConfig::default(),
    );

    let err = service
        .weekly_overview(Uuid::new_v4(), None, "table", march(15))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_today_progress_is_capped() {
    init_test_logging();
    let user = Uuid::new_v4();
    let service = AnalyticsService::new(seeded_store(user).await, SafetyScoreConfig::default());

    let today = service.today_progress(user, march(6)).await.unwrap();
    let protein = &today.nutrients["protein"];
    assert!((protein.consumed - 120.0).abs() < f64::EPSILON);
    assert!((protein.percent - 100.0).abs() < f64::EPSILON);

    // No goal and no data: all zero, not an error
    let stranger = service.today_progress(Uuid::new_v4(), march(6)).await.unwrap();
    assert!(stranger.nutrients["calories"].percent.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_recompute_daily_totals_from_logged_items() {
    init_test_logging();
    let user = Uuid::new_v4();
    let store = Arc::new(InMemoryNutritionStore::new());
    let meals = MealSafetyService::new(
        store.clone(),
        Arc::new(RecordingAlertSink::default()),
        FoodSafetyConfig::default(),
    );
    let items = vec![
        MealItemInput {
            label: "yogurt".to_owned(),
            profile: profile(&[("ENERC_KCAL", 150.0), ("PROCNT", 12.0), ("NA", 80.0)]),
            is_beverage: false,
            serving_weight_g: None,
        },
        MealItemInput {
            label: "lentils".to_owned(),
            profile: profile(&[("PROCNT", 9.0), ("CHOCDF", 20.0), ("FAT", 0.5), ("NA", 5.0)]),
            is_beverage: false,
            serving_weight_g: None,
        },
    ];
    meals
        .log_meal(user, Uuid::new_v4(), march(10), EaterProfile::default(), &items)
        .await
        .unwrap();

    let service = AnalyticsService::new(store.clone(), SafetyScoreConfig::default());
    let totals = service
        .recompute_daily_totals(user, march(10), 6.0, 45.0)
        .await
        .unwrap();

    // 150 + (9*4 + 20*4 + 0.5*9)
    assert!((totals.calories - 270.5).abs() < f64::EPSILON);
    assert!((totals.protein - 21.0).abs() < f64::EPSILON);
    assert!((totals.sodium - 85.0).abs() < f64::EPSILON);
    assert!((totals.hydration - 6.0).abs() < f64::EPSILON);

    let err = service
        .recompute_daily_totals(user, march(10), -1.0, 0.0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_set_goal_validates_targets() {
    init_test_logging();
    let service = AnalyticsService::new(
        Arc::new(InMemoryNutritionStore::new()),
        SafetyScoreConfig::default(),
    );
    let goal = GoalProfile {
        sodium: f64::NAN,
        ..adult_goal()
    };

    let err = service.set_goal(Uuid::new_v4(), goal).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_store_write_failure_is_database_error() {
    init_test_logging();
    let service = AnalyticsService::new(
        Arc::new(ReadOnlyNutritionStore::default()),
        SafetyScoreConfig::default(),
    );
    let user = Uuid::new_v4();

    let err = service.set_goal(user, adult_goal()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);

    let err = service
        .recompute_daily_totals(user, march(4), 6.0, 20.0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert!(err.message.contains("put_daily_totals"));
}
