// ABOUTME: Item and meal assessment commands for nutriguard-cli
// ABOUTME: Evaluates a nutrient profile file or logs a meal through the meal safety service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::json::{print_json, read_json, today};
use anyhow::Result;
use nutriguard::config::IntelligenceConfig;
use nutriguard::intelligence::date_window::parse_day;
use nutriguard::intelligence::{AssessmentContext, FoodSafetyEvaluator};
use nutriguard::models::NutrientProfile;
use nutriguard::services::alerts::TracingAlertSink;
use nutriguard::services::meal_safety::{EaterProfile, MealItemInput, MealSafetyService};
use nutriguard::services::store::InMemoryNutritionStore;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Assess one item and print the structured assessment
pub fn assess(
    config: &IntelligenceConfig,
    profile_path: &Path,
    eater: EaterProfile,
    label: &str,
    beverage: bool,
    serving_weight_g: Option<f64>,
) -> Result<()> {
    let profile: NutrientProfile = read_json(profile_path)?;

    let mut builder = AssessmentContext::builder()
        .age_years(eater.age_years)
        .sex(eater.sex)
        .calorie_target(eater.calorie_target)
        .beverage(beverage)
        .item_label(label);
    if let Some(grams) = serving_weight_g {
        builder = builder.serving_weight_g(grams);
    }
    let context = builder.build()?;

    let assessment = FoodSafetyEvaluator::new(&config.food_safety).evaluate(&profile, &context);
    print_json(&assessment)
}

/// Log a meal against an in-memory store and print per-item verdicts
pub async fn meal(
    config: &IntelligenceConfig,
    items_path: &Path,
    eater: EaterProfile,
    date: Option<&str>,
) -> Result<()> {
    let items: Vec<MealItemInput> = read_json(items_path)?;
    let date = date.map(parse_day).transpose()?.unwrap_or_else(today);

    let service = MealSafetyService::new(
        Arc::new(InMemoryNutritionStore::new()),
        Arc::new(TracingAlertSink),
        config.food_safety.clone(),
    );
    let logged = service
        .log_meal(Uuid::new_v4(), Uuid::new_v4(), date, eater, &items)
        .await?;

    info!(
        items = logged.items.len(),
        meal_safe = logged.summary.meal_safe,
        "Meal assessed"
    );
    print_json(&logged)
}
