// ABOUTME: Threshold configuration for the DGA-aligned food safety evaluator
// ABOUTME: Configures sugar, saturated fat, sodium, trans fat, AMDR, fiber, grain, and energy density rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food Safety Rule Configuration
//!
//! Defaults follow the Dietary Guidelines for Americans 2020-2025:
//!
//! - Added sugars and saturated fat: less than 10% of calories per day (age 2+)
//! - Added sugars: avoid entirely under age 2
//! - Sodium: age-banded Chronic Disease Risk Reduction (CDRR) intakes
//! - Per-serving "high" follows the food label convention of 20% daily value
//! - Macronutrient shares follow the Acceptable Macronutrient Distribution Ranges (AMDR)

use super::error::ConfigError;
use crate::constants::energy::DEFAULT_CALORIE_TARGET_KCAL;
use serde::{Deserialize, Serialize};

/// Complete evaluator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodSafetyConfig {
    /// Daily energy defaults
    pub energy: EnergyConfig,
    /// Added and total sugar rules
    pub sugars: SugarConfig,
    /// Saturated fat rules
    pub saturated_fat: SaturatedFatConfig,
    /// Sodium and potassium rules
    pub sodium: SodiumConfig,
    /// Trans fat rule
    pub trans_fat: TransFatConfig,
    /// Macronutrient distribution ranges
    pub amdr: AmdrConfig,
    /// Fiber density rule
    pub fiber: FiberConfig,
    /// Whole/refined grain label heuristics
    pub grains: GrainConfig,
    /// Energy density per serving weight
    pub energy_density: EnergyDensityConfig,
}

/// Daily energy settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Calorie target used when the consumer supplies none (kcal/day)
    pub default_calorie_target_kcal: f64,
}

/// Shared limit model for nutrients capped at a share of daily calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieShareLimits {
    /// Daily cap as a fraction of daily calories (0.10)
    pub daily_fraction_of_kcal: f64,
    /// Item flagged when the nutrient supplies at least this fraction of its calories
    pub item_kcal_share_high: f64,
    /// One serving at or above this share of the daily cap is a caution
    pub daily_share_caution: f64,
    /// One serving at or above this share of the daily cap is high
    pub daily_share_high: f64,
}

impl Default for CalorieShareLimits {
    fn default() -> Self {
        Self {
            daily_fraction_of_kcal: 0.10,
            item_kcal_share_high: 0.10,
            daily_share_caution: 0.20,
            daily_share_high: 0.40,
        }
    }
}

impl CalorieShareLimits {
    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.daily_fraction_of_kcal <= 0.0 || self.daily_fraction_of_kcal > 1.0 {
            return Err(ConfigError::ValueOutOfRange(name));
        }
        if self.item_kcal_share_high <= 0.0 || self.item_kcal_share_high > 1.0 {
            return Err(ConfigError::ValueOutOfRange(name));
        }
        if self.daily_share_caution <= 0.0 || self.daily_share_caution >= self.daily_share_high {
            return Err(ConfigError::InvalidRange(name));
        }
        Ok(())
    }
}

/// Sugar rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SugarConfig {
    /// Added sugar limits (10% of daily kcal)
    pub limits: CalorieShareLimits,
    /// Children strictly younger than this avoid added sugar entirely (years)
    pub infant_age_below_years: u32,
    /// Beverage nudge: added sugar at or above this (g)
    pub beverage_added_sugar_g: f64,
    /// Beverage nudge: total sugar at or above this (g)
    pub beverage_total_sugar_g: f64,
    /// Beverage nudge: only for drinks with at least this much energy (kcal)
    pub beverage_min_kcal: f64,
}

impl Default for SugarConfig {
    fn default() -> Self {
        Self {
            limits: CalorieShareLimits::default(),
            infant_age_below_years: 2,
            beverage_added_sugar_g: 10.0,
            beverage_total_sugar_g: 15.0,
            beverage_min_kcal: 50.0,
        }
    }
}

/// Saturated fat rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaturatedFatConfig {
    /// Saturated fat limits (10% of daily kcal)
    pub limits: CalorieShareLimits,
    /// Lowercase label terms hinting at a saturated fat source when the nutrient is unreported
    pub source_terms: Vec<String>,
}

impl Default for SaturatedFatConfig {
    fn default() -> Self {
        Self {
            limits: CalorieShareLimits::default(),
            source_terms: to_owned_terms(&[
                "butter",
                "ghee",
                "cream",
                "cheese",
                "bacon",
                "sausage",
                "shortening",
                "palm oil",
                "palm kernel",
                "coconut oil",
                "lard",
            ]),
        }
    }
}

/// Sodium rule configuration
///
/// CDRR limits by age band (mg/day): 1-3 years 1200, 4-8 years 1500, 9-13 years 1800,
/// 14+ (and unknown age) 2300.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SodiumConfig {
    /// Limit for ages 1-3 (mg/day)
    pub toddler_limit_mg: f64,
    /// Limit for ages 4-8 (mg/day)
    pub child_limit_mg: f64,
    /// Limit for ages 9-13 (mg/day)
    pub preteen_limit_mg: f64,
    /// Limit for ages 14+ and unknown age (mg/day)
    pub adult_limit_mg: f64,
    /// One serving at or above this share of the daily limit is a caution
    pub share_caution: f64,
    /// One serving at or above this share of the daily limit is high
    pub share_high: f64,
    /// Sodium density at or above this is flagged (mg per 100 kcal)
    pub dense_mg_per_100kcal: f64,
    /// Sodium/potassium ratio above this is flagged
    pub potassium_ratio_max: f64,
}

impl Default for SodiumConfig {
    fn default() -> Self {
        Self {
            toddler_limit_mg: 1200.0,
            child_limit_mg: 1500.0,
            preteen_limit_mg: 1800.0,
            adult_limit_mg: 2300.0,
            share_caution: 0.20,
            share_high: 0.40,
            dense_mg_per_100kcal: 400.0,
            potassium_ratio_max: 1.5,
        }
    }
}

impl SodiumConfig {
    /// Daily sodium limit for an age in years (0 = unknown, treated as adult)
    #[must_use]
    pub const fn limit_for_age(&self, age_years: u32) -> f64 {
        match age_years {
            1..=3 => self.toddler_limit_mg,
            4..=8 => self.child_limit_mg,
            9..=13 => self.preteen_limit_mg,
            _ => self.adult_limit_mg,
        }
    }
}

/// Trans fat rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransFatConfig {
    /// Amounts at or above this are high severity (g)
    pub high_g: f64,
}

impl Default for TransFatConfig {
    fn default() -> Self {
        Self { high_g: 0.5 }
    }
}

/// Acceptable Macronutrient Distribution Ranges (percent of macro energy)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmdrConfig {
    /// Carbohydrate lower bound (%)
    pub carbs_min_percent: f64,
    /// Carbohydrate upper bound (%)
    pub carbs_max_percent: f64,
    /// Protein lower bound (%)
    pub protein_min_percent: f64,
    /// Protein upper bound (%)
    pub protein_max_percent: f64,
    /// Fat lower bound (%)
    pub fat_min_percent: f64,
    /// Fat upper bound (%)
    pub fat_max_percent: f64,
}

impl Default for AmdrConfig {
    fn default() -> Self {
        Self {
            carbs_min_percent: 45.0,
            carbs_max_percent: 65.0,
            protein_min_percent: 10.0,
            protein_max_percent: 35.0,
            fat_min_percent: 20.0,
            fat_max_percent: 35.0,
        }
    }
}

/// Fiber density rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiberConfig {
    /// Rule only applies to items with at least this much carbohydrate (g)
    pub min_carbs_g: f64,
    /// Below this is a low-fiber nudge (g per 100 kcal)
    pub low_per_100kcal: f64,
    /// At or above this is a good fiber source (g per 100 kcal)
    pub good_per_100kcal: f64,
}

impl Default for FiberConfig {
    fn default() -> Self {
        Self {
            min_carbs_g: 15.0,
            low_per_100kcal: 1.0,
            good_per_100kcal: 2.5,
        }
    }
}

/// Grain label heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrainConfig {
    /// Lowercase terms marking a whole-grain item (checked first)
    pub whole_grain_terms: Vec<String>,
    /// Lowercase terms marking a refined-grain item
    pub refined_grain_terms: Vec<String>,
}

impl Default for GrainConfig {
    fn default() -> Self {
        Self {
            whole_grain_terms: to_owned_terms(&[
                "whole wheat",
                "whole-grain",
                "whole grain",
                "brown rice",
                "oat",
                "quinoa",
                "bulgur",
                "rye",
                "wholemeal",
            ]),
            refined_grain_terms: to_owned_terms(&[
                "white bread",
                "white rice",
                "refined flour",
                "all-purpose flour",
                "maida",
                "cake",
                "pastry",
                "cracker",
                "biscuit",
            ]),
        }
    }
}

/// Energy density thresholds (kcal per 100 g of serving weight)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyDensityConfig {
    /// High energy density
    pub high_kcal_per_100g: f64,
    /// Very high energy density
    pub very_high_kcal_per_100g: f64,
}

impl Default for EnergyDensityConfig {
    fn default() -> Self {
        Self {
            high_kcal_per_100g: 150.0,
            very_high_kcal_per_100g: 275.0,
        }
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            default_calorie_target_kcal: DEFAULT_CALORIE_TARGET_KCAL,
        }
    }
}

impl FoodSafetyConfig {
    /// Validate threshold ordering and ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a threshold is out of range or thresholds are misordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.energy.default_calorie_target_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default calorie target must be positive",
            ));
        }

        self.sugars.limits.validate("added sugar limits")?;
        self.saturated_fat.limits.validate("saturated fat limits")?;

        let sodium = &self.sodium;
        if sodium.toddler_limit_mg <= 0.0
            || sodium.toddler_limit_mg > sodium.child_limit_mg
            || sodium.child_limit_mg > sodium.preteen_limit_mg
            || sodium.preteen_limit_mg > sodium.adult_limit_mg
        {
            return Err(ConfigError::InvalidRange(
                "sodium limits must be positive and ascending by age band",
            ));
        }
        if sodium.share_caution <= 0.0 || sodium.share_caution >= sodium.share_high {
            return Err(ConfigError::InvalidRange(
                "sodium share_caution must be < share_high",
            ));
        }
        if sodium.potassium_ratio_max <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sodium/potassium ratio limit must be positive",
            ));
        }

        if self.trans_fat.high_g <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trans fat high threshold must be positive",
            ));
        }

        let amdr = &self.amdr;
        if amdr.carbs_min_percent >= amdr.carbs_max_percent
            || amdr.protein_min_percent >= amdr.protein_max_percent
            || amdr.fat_min_percent >= amdr.fat_max_percent
        {
            return Err(ConfigError::InvalidRange(
                "AMDR lower bounds must be < upper bounds",
            ));
        }

        if self.fiber.low_per_100kcal >= self.fiber.good_per_100kcal {
            return Err(ConfigError::InvalidRange(
                "fiber low_per_100kcal must be < good_per_100kcal",
            ));
        }

        if self.energy_density.high_kcal_per_100g >= self.energy_density.very_high_kcal_per_100g
        {
            return Err(ConfigError::InvalidRange(
                "energy density high must be < very_high",
            ));
        }

        // Labels are lowercased once per evaluation and matched against terms as stored
        let terms = self
            .saturated_fat
            .source_terms
            .iter()
            .chain(&self.grains.whole_grain_terms)
            .chain(&self.grains.refined_grain_terms);
        for term in terms {
            if term.trim().is_empty() || *term != term.to_lowercase() {
                return Err(ConfigError::InvalidLabelTerm(term.clone()));
            }
        }

        Ok(())
    }
}

fn to_owned_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| (*term).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(FoodSafetyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sodium_limit_bands() {
        let sodium = SodiumConfig::default();
        assert!((sodium.limit_for_age(0) - 2300.0).abs() < f64::EPSILON);
        assert!((sodium.limit_for_age(1) - 1200.0).abs() < f64::EPSILON);
        assert!((sodium.limit_for_age(3) - 1200.0).abs() < f64::EPSILON);
        assert!((sodium.limit_for_age(4) - 1500.0).abs() < f64::EPSILON);
        assert!((sodium.limit_for_age(8) - 1500.0).abs() < f64::EPSILON);
        assert!((sodium.limit_for_age(13) - 1800.0).abs() < f64::EPSILON);
        assert!((sodium.limit_for_age(14) - 2300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_label_terms_must_be_lowercase() {
        let mut config = FoodSafetyConfig::default();
        config.grains.refined_grain_terms.push("Croissant".to_owned());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLabelTerm(term)) if term == "Croissant"
        ));

        let mut config = FoodSafetyConfig::default();
        config.saturated_fat.source_terms.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_misordered_shares_rejected() {
        let mut config = FoodSafetyConfig::default();
        config.sodium.share_caution = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
