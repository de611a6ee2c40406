// ABOUTME: Core value models exchanged between the evaluator, aggregator and callers
// ABOUTME: Re-exports nutrient profiles, daily totals, goals, and item safety records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are value objects produced fresh per call. None of them holds a reference
//! to another; persistence of any of them is the caller's responsibility.
//!
//! ## Core Models
//!
//! - `NutrientProfile`: loosely-keyed nutrient quantities for one consumed item
//! - `DailyNutrientTotals`: one user's consumption for one calendar day
//! - `GoalProfile`: the user's daily targets
//! - `ItemSafetyRecord` / `SafetyBreakdown`: persisted per-item verdicts and their counts

mod nutrition;
mod safety;

pub use nutrition::{DailyNutrientTotals, GoalProfile, ItemNutrients, NutrientProfile, Sex};
pub use safety::{
    ItemSafetyRecord, ItemWarningSummary, MealWarnings, SafetyBreakdown, WARNING_SEPARATOR,
};
