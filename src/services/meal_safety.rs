// ABOUTME: Meal logging service evaluating each item at log time and raising safety alerts
// ABOUTME: Persists item verdicts with nutrient sums and summarizes warnings per meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::alerts::{AlertSink, SafetyAlert};
use super::store::{LoggedItemRecord, NutritionStore};
use crate::errors::AppResult;
use crate::intelligence::nutrient_picker::NutrientLookup;
use crate::intelligence::{
    AlertTrigger, AssessmentContext, FoodAssessment, FoodSafetyConfig, FoodSafetyEvaluator,
    Nutrient,
};
use crate::logging::AppLogger;
use crate::models::{ItemNutrients, ItemSafetyRecord, MealWarnings, NutrientProfile, Sex};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Who is eating; shared by every item of a meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EaterProfile {
    /// Age in whole years (`0` = unknown)
    #[serde(default)]
    pub age_years: u32,
    /// Consumer sex
    #[serde(default)]
    pub sex: Sex,
    /// Daily calorie target in kcal (`0` = configured default)
    #[serde(default)]
    pub calorie_target: f64,
}

/// One item as submitted by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItemInput {
    /// Human label of the item
    pub label: String,
    /// Nutrients as reported by the nutrient source
    pub profile: NutrientProfile,
    /// Whether the item is a drink
    #[serde(default)]
    pub is_beverage: bool,
    /// Serving weight in grams, when known
    #[serde(default)]
    pub serving_weight_g: Option<f64>,
}

/// Verdict for one logged item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOutcome {
    /// Human label of the item
    pub item_label: String,
    /// Full structured assessment
    pub assessment: FoodAssessment,
    /// Alert condition that fired, if any
    pub alert: Option<AlertTrigger>,
}

/// Result of logging a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// Meal identifier
    pub meal_id: Uuid,
    /// Local calendar day of the meal
    pub date: NaiveDate,
    /// Per-item verdicts in input order
    pub items: Vec<ItemOutcome>,
    /// Persisted-form warning summary
    pub summary: MealWarnings,
}

/// Evaluates items when they are logged
pub struct MealSafetyService {
    store: Arc<dyn NutritionStore>,
    alerts: Arc<dyn AlertSink>,
    config: FoodSafetyConfig,
}

impl MealSafetyService {
    /// Create the service from its collaborators and rule thresholds
    #[must_use]
    pub fn new(
        store: Arc<dyn NutritionStore>,
        alerts: Arc<dyn AlertSink>,
        config: FoodSafetyConfig,
    ) -> Self {
        Self {
            store,
            alerts,
            config,
        }
    }

    /// Evaluate, persist, and alert on every item of a meal
    ///
    /// All contexts are validated before anything is written, and the whole meal is stored
    /// in one write. Alerts go out only after the meal is stored; a failing alert sink is
    /// logged and does not fail the call.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative calorie target or non-positive serving weight,
    /// or the store's error
    pub async fn log_meal(
        &self,
        user_id: Uuid,
        meal_id: Uuid,
        date: NaiveDate,
        eater: EaterProfile,
        items: &[MealItemInput],
    ) -> AppResult<LoggedMeal> {
        let batch = items
            .iter()
            .map(|item| Ok((item.profile.clone(), item_context(eater, item)?)))
            .collect::<AppResult<Vec<(NutrientProfile, AssessmentContext)>>>()?;

        let assessments = FoodSafetyEvaluator::new(&self.config).evaluate_batch(&batch);
        let records: Vec<ItemSafetyRecord> = items
            .iter()
            .zip(&assessments)
            .map(|(item, assessment)| assessment.to_record(item.label.as_str()))
            .collect();

        let stored = items
            .iter()
            .zip(&records)
            .map(|(item, record)| LoggedItemRecord {
                meal_id,
                date,
                record: record.clone(),
                nutrients: item_nutrients(&item.profile),
            })
            .collect();
        self.store
            .save_items(user_id, stored)
            .await
            .inspect_err(|e| {
                AppLogger::log_collaborator_failure("nutrition_store", "save_items", &e.to_string());
            })?;

        let mut outcomes = Vec::with_capacity(items.len());
        for ((item, assessment), record) in items.iter().zip(assessments).zip(&records) {
            AppLogger::log_item_assessment(
                user_id,
                &item.label,
                assessment.safe,
                assessment.warnings.len(),
            );

            let alert = assessment.alert_trigger();
            if let Some(trigger) = alert {
                let emitted = self
                    .alerts
                    .emit(SafetyAlert {
                        user_id,
                        meal_id,
                        item_label: item.label.clone(),
                        trigger,
                        message: record.warnings.clone(),
                    })
                    .await;
                if let Err(e) = emitted {
                    AppLogger::log_collaborator_failure("alert_sink", "emit", &e.to_string());
                }
            }

            outcomes.push(ItemOutcome {
                item_label: item.label.clone(),
                assessment,
                alert,
            });
        }

        let summary = MealWarnings::from_records(&records);
        info!(
            user.id = %user_id,
            meal.id = %meal_id,
            meal.items = outcomes.len(),
            meal.safe = summary.meal_safe,
            "Meal logged"
        );

        Ok(LoggedMeal {
            meal_id,
            date,
            items: outcomes,
            summary,
        })
    }

    /// Warning summary of a stored meal
    ///
    /// # Errors
    ///
    /// Returns the store's error
    pub async fn meal_warnings(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<MealWarnings> {
        let items = self.store.meal_items(user_id, meal_id).await?;
        let records: Vec<_> = items.into_iter().map(|item| item.record).collect();
        Ok(MealWarnings::from_records(&records))
    }
}

fn item_context(eater: EaterProfile, item: &MealItemInput) -> AppResult<AssessmentContext> {
    let mut builder = AssessmentContext::builder()
        .age_years(eater.age_years)
        .sex(eater.sex)
        .calorie_target(eater.calorie_target)
        .beverage(item.is_beverage)
        .item_label(item.label.as_str());
    if let Some(grams) = item.serving_weight_g {
        builder = builder.serving_weight_g(grams);
    }
    builder.build()
}

/// Tracked nutrient sums an item contributes to its day
#[must_use]
pub fn item_nutrients(profile: &NutrientProfile) -> ItemNutrients {
    ItemNutrients {
        calories: profile.energy_kcal(),
        protein: profile.get(Nutrient::Protein),
        carbs: profile.get(Nutrient::Carbohydrate),
        fat: profile.get(Nutrient::Fat),
        sodium: profile.get(Nutrient::Sodium),
        sugar: profile.get(Nutrient::TotalSugar),
    }
}
