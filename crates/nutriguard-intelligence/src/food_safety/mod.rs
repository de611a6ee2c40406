// ABOUTME: DGA-aligned food safety evaluator for single consumed items
// ABOUTME: Assessment context builder, ordered rule evaluation, safe flag, and alert trigger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Safety Evaluator
//!
//! Maps a [`NutrientProfile`] and an [`AssessmentContext`] to an ordered list of
//! [`Warning`]s following the Dietary Guidelines for Americans 2020-2025.
//!
//! Rule order is fixed:
//!
//! 1. Energy reconstruction from macronutrients when energy is not reported
//! 2. Added sugars (infant rule, item share, daily share, beverage nudge)
//! 3. Saturated fat (item share, daily share, label heuristic)
//! 4. Sodium (age-banded daily share, density, potassium ratio)
//! 5. Trans fat
//! 6. Macronutrient distribution (AMDR)
//! 7. Fiber density
//! 8. Whole/refined grain label heuristic
//! 9. Energy density per serving weight
//!
//! An item is safe when no `high` or `caution` warning was produced.

mod rules;
mod warning;

pub use warning::{render_message, Severity, Warning, WarningCode};

use crate::config::FoodSafetyConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{ItemSafetyRecord, NutrientProfile, Sex, WARNING_SEPARATOR};
use rayon::prelude::*;
use rules::ItemFacts;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Assessment context
// ============================================================================

/// Who is eating the item and what the item is
///
/// Immutable once built; use [`AssessmentContext::builder`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentContext {
    age_years: u32,
    sex: Sex,
    calorie_target: f64,
    is_beverage: bool,
    item_label: String,
    serving_weight_g: Option<f64>,
}

impl AssessmentContext {
    /// Start building a context; every field is optional
    #[must_use]
    pub fn builder() -> AssessmentContextBuilder {
        AssessmentContextBuilder::default()
    }

    /// Age in whole years, `0` when unknown
    #[must_use]
    pub const fn age_years(&self) -> u32 {
        self.age_years
    }

    /// Consumer sex
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Daily calorie target as supplied, `0` when unknown
    #[must_use]
    pub const fn calorie_target(&self) -> f64 {
        self.calorie_target
    }

    /// Whether the item is a drink
    #[must_use]
    pub const fn is_beverage(&self) -> bool {
        self.is_beverage
    }

    /// Human label of the item
    #[must_use]
    pub fn item_label(&self) -> &str {
        &self.item_label
    }

    /// Serving weight in grams, when known
    #[must_use]
    pub const fn serving_weight_g(&self) -> Option<f64> {
        self.serving_weight_g
    }

    /// Calorie target used for daily-share rules
    #[must_use]
    pub fn effective_calorie_target(&self, config: &FoodSafetyConfig) -> f64 {
        if self.calorie_target > 0.0 {
            self.calorie_target
        } else {
            config.energy.default_calorie_target_kcal
        }
    }
}

/// Builder for [`AssessmentContext`]
#[derive(Debug, Clone, Default)]
pub struct AssessmentContextBuilder {
    context: AssessmentContext,
}

impl AssessmentContextBuilder {
    /// Age in whole years (`0` = unknown)
    #[must_use]
    pub const fn age_years(mut self, age_years: u32) -> Self {
        self.context.age_years = age_years;
        self
    }

    /// Consumer sex
    #[must_use]
    pub const fn sex(mut self, sex: Sex) -> Self {
        self.context.sex = sex;
        self
    }

    /// Daily calorie target in kcal (`0` = use the configured default)
    #[must_use]
    pub const fn calorie_target(mut self, kcal: f64) -> Self {
        self.context.calorie_target = kcal;
        self
    }

    /// Mark the item as a drink
    #[must_use]
    pub const fn beverage(mut self, is_beverage: bool) -> Self {
        self.context.is_beverage = is_beverage;
        self
    }

    /// Human label of the item
    #[must_use]
    pub fn item_label(mut self, label: impl Into<String>) -> Self {
        self.context.item_label = label.into();
        self
    }

    /// Serving weight in grams
    #[must_use]
    pub const fn serving_weight_g(mut self, grams: f64) -> Self {
        self.context.serving_weight_g = Some(grams);
        self
    }

    /// Validate and build the context
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the calorie target is negative or not finite, or the
    /// serving weight is not a positive finite number
    pub fn build(self) -> AppResult<AssessmentContext> {
        let context = self.context;
        if !context.calorie_target.is_finite() || context.calorie_target < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Calorie target must be a non-negative number, got {}",
                context.calorie_target
            )));
        }
        if let Some(grams) = context.serving_weight_g {
            if !grams.is_finite() || grams <= 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Serving weight must be a positive number of grams, got {grams}"
                )));
            }
        }
        Ok(context)
    }
}

// ============================================================================
// Assessment result
// ============================================================================

/// Condition under which a caller may raise a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertTrigger {
    /// At least one `high` warning
    HighSeverity,
    /// Two or more `caution` warnings and no `high` warning
    MultipleCautions,
}

impl AlertTrigger {
    /// Trigger condition met by a warning list, if any
    #[must_use]
    pub fn from_warnings(warnings: &[Warning]) -> Option<Self> {
        if warnings.iter().any(|w| w.severity == Severity::High) {
            return Some(Self::HighSeverity);
        }
        let cautions = warnings
            .iter()
            .filter(|w| w.severity == Severity::Caution)
            .count();
        (cautions >= 2).then_some(Self::MultipleCautions)
    }
}

/// Outcome of evaluating one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAssessment {
    /// No `high` or `caution` warning was produced
    pub safe: bool,
    /// Item energy used by the rules (reported or reconstructed), kcal
    pub energy_kcal: f64,
    /// Warnings in rule order
    pub warnings: Vec<Warning>,
}

impl FoodAssessment {
    fn new(warnings: Vec<Warning>, energy_kcal: f64) -> Self {
        Self {
            safe: !warnings.iter().any(|w| w.severity.marks_unsafe()),
            energy_kcal,
            warnings,
        }
    }

    /// Warning messages in rule order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.message.clone()).collect()
    }

    /// Messages joined with `"; "` as persisted with the item
    #[must_use]
    pub fn joined_messages(&self) -> String {
        self.messages().join(WARNING_SEPARATOR)
    }

    /// Notification trigger condition, if met
    #[must_use]
    pub fn alert_trigger(&self) -> Option<AlertTrigger> {
        AlertTrigger::from_warnings(&self.warnings)
    }

    /// The persisted form of this assessment
    #[must_use]
    pub fn to_record(&self, item_label: impl Into<String>) -> ItemSafetyRecord {
        ItemSafetyRecord {
            item_label: item_label.into(),
            safe: self.safe,
            warnings: self.joined_messages(),
        }
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Applies the DGA rules with a given threshold configuration
#[derive(Debug, Clone, Copy)]
pub struct FoodSafetyEvaluator<'a> {
    config: &'a FoodSafetyConfig,
}

impl<'a> FoodSafetyEvaluator<'a> {
    /// Create an evaluator over a validated configuration
    #[must_use]
    pub const fn new(config: &'a FoodSafetyConfig) -> Self {
        Self { config }
    }

    /// Evaluate one item
    #[must_use]
    pub fn evaluate(&self, profile: &NutrientProfile, context: &AssessmentContext) -> FoodAssessment {
        let facts = ItemFacts::read(profile, context);
        let warnings = rules::apply_all(&facts, context, self.config);
        let assessment = FoodAssessment::new(warnings, facts.kcal);

        debug!(
            item = context.item_label(),
            energy_kcal = assessment.energy_kcal,
            warnings = assessment.warnings.len(),
            safe = assessment.safe,
            "Evaluated food item"
        );

        assessment
    }

    /// Evaluate independent items in parallel, preserving input order
    #[must_use]
    pub fn evaluate_batch(
        &self,
        items: &[(NutrientProfile, AssessmentContext)],
    ) -> Vec<FoodAssessment> {
        items
            .par_iter()
            .map(|(profile, context)| self.evaluate(profile, context))
            .collect()
    }
}

/// Warning messages only, for callers that persist or display plain text
#[must_use]
pub fn assess_messages(
    profile: &NutrientProfile,
    context: &AssessmentContext,
    config: &FoodSafetyConfig,
) -> Vec<String> {
    FoodSafetyEvaluator::new(config)
        .evaluate(profile, context)
        .messages()
}
