// ABOUTME: Nutrition value models for consumed items, daily totals, and daily goals
// ABOUTME: NutrientProfile, Sex, ItemNutrients, DailyNutrientTotals, and GoalProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nutrient quantities for one consumed item, keyed by the source's nutrient code
///
/// Keys are not consistent across nutrient sources (`ENERC_KCAL`, `Energy`, `Calories`),
/// so lookups go through the tolerant picker in the intelligence crate. Keys are kept
/// ordered so that case-insensitive lookups resolve deterministically.
///
/// Units follow the nutrient source convention: energy in kcal, sugars/fats/fiber/protein/
/// carbohydrates in grams, sodium and potassium in milligrams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct NutrientProfile {
    values: BTreeMap<String, f64>,
}

impl NutrientProfile {
    /// Create an empty profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from `(code, quantity)` pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any quantity is negative or not finite
    pub fn try_from_pairs<K, I>(pairs: I) -> AppResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut profile = Self::new();
        for (key, value) in pairs {
            profile.insert(key, value)?;
        }
        Ok(profile)
    }

    /// Insert or overwrite one nutrient quantity
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the quantity is negative or not finite
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> AppResult<()> {
        let key = key.into();
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Nutrient quantity for '{key}' must be a finite non-negative number, got {value}"
            )));
        }
        self.values.insert(key, value);
        Ok(())
    }

    /// Value stored under exactly this key
    #[must_use]
    pub fn get_exact(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Iterate over `(code, quantity)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Number of nutrient entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the profile has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for NutrientProfile {
    type Error = AppError;

    fn try_from(values: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(values)
    }
}

impl From<NutrientProfile> for BTreeMap<String, f64> {
    fn from(profile: NutrientProfile) -> Self {
        profile.values
    }
}

/// Consumer sex, used for context only (no rule currently branches on it)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Not supplied
    #[default]
    Unknown,
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Parse sex from a free-form string, falling back to `Unknown`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

/// Tracked nutrient sums for one logged item, as persisted with the item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemNutrients {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fat: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Total sugars (g)
    pub sugar: f64,
}

/// One user's consumption for one calendar day
///
/// Recomputed and overwritten whenever the day's meals, hydration or exercise change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrientTotals {
    /// Local calendar day
    pub date: NaiveDate,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Total fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: f64,
    /// Total sugars (g)
    #[serde(default)]
    pub sugar: f64,
    /// Water (glasses)
    #[serde(default)]
    pub hydration: f64,
    /// Exercise (minutes)
    #[serde(default)]
    pub exercise: f64,
}

impl DailyNutrientTotals {
    /// A day with no recorded consumption
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories: 0.0,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            sodium: 0.0,
            sugar: 0.0,
            hydration: 0.0,
            exercise: 0.0,
        }
    }

    /// Sum the day's logged items plus manually entered hydration and exercise
    #[must_use]
    pub fn from_items(
        date: NaiveDate,
        items: &[ItemNutrients],
        hydration: f64,
        exercise: f64,
    ) -> Self {
        items.iter().fold(
            Self {
                hydration,
                exercise,
                ..Self::empty(date)
            },
            |mut totals, item| {
                totals.calories += item.calories;
                totals.protein += item.protein;
                totals.carbs += item.carbs;
                totals.fat += item.fat;
                totals.sodium += item.sodium;
                totals.sugar += item.sugar;
                totals
            },
        )
    }
}

/// A user's daily targets
///
/// A single mutable record per user; every aggregation works on a read-only snapshot.
/// A user without a goal record is treated as having all targets at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalProfile {
    /// Energy target (kcal)
    pub calories: f64,
    /// Protein target (g)
    pub protein: f64,
    /// Carbohydrate target (g)
    pub carbs: f64,
    /// Fat target (g)
    pub fat: f64,
    /// Sodium target (mg)
    pub sodium: f64,
    /// Sugar target (g)
    pub sugar: f64,
    /// Hydration target (glasses)
    pub hydration: f64,
    /// Exercise target (minutes)
    pub exercise: f64,
}
