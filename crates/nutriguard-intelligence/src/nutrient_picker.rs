// ABOUTME: Tolerant nutrient lookup over loosely-keyed nutrient maps
// ABOUTME: Alias table per logical nutrient with exact, case-insensitive, and separator-insensitive matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient sources disagree on keys (`ENERC_KCAL` vs `Energy` vs `Calories`,
//! `SUGAR.added` vs `SUGAR_ADDED`). Rule code never names raw keys: it asks for a
//! [`Nutrient`] and the alias table resolves it.
//!
//! A missing nutrient reads as `0.0`. Rules treat `0.0` as "not reported" and gate on
//! `value > 0.0`.

use crate::constants::energy::{
    KCAL_PER_G_ALCOHOL, KCAL_PER_G_CARBOHYDRATE, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::models::NutrientProfile;
use serde::{Deserialize, Serialize};

/// Logical nutrients read by the food safety rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Energy,
    /// Carbohydrate by difference (g)
    Carbohydrate,
    /// Protein (g)
    Protein,
    /// Total fat (g)
    Fat,
    /// Alcohol (g)
    Alcohol,
    /// Added sugars (g)
    AddedSugar,
    /// Total sugars (g)
    TotalSugar,
    /// Saturated fatty acids (g)
    SaturatedFat,
    /// Trans fatty acids (g)
    TransFat,
    /// Sodium (mg)
    Sodium,
    /// Potassium (mg)
    Potassium,
    /// Total dietary fiber (g)
    Fiber,
}

impl Nutrient {
    /// Every logical nutrient, in rule evaluation order
    pub const ALL: [Self; 12] = [
        Self::Energy,
        Self::Carbohydrate,
        Self::Protein,
        Self::Fat,
        Self::Alcohol,
        Self::AddedSugar,
        Self::TotalSugar,
        Self::SaturatedFat,
        Self::TransFat,
        Self::Sodium,
        Self::Potassium,
        Self::Fiber,
    ];

    /// Source keys tried in order for this nutrient
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Energy => &["ENERC_KCAL", "Energy", "Calories", "kcal"],
            Self::Carbohydrate => &["CHOCDF", "Carbohydrate", "Carbs", "carbohydrates"],
            Self::Protein => &["PROCNT", "Protein"],
            Self::Fat => &["FAT", "Fat", "TotalFat"],
            Self::Alcohol => &["ALC", "Alcohol"],
            Self::AddedSugar => &["SUGAR.added", "SUGAR_ADDED", "Sugar.added", "AddedSugar"],
            Self::TotalSugar => &["SUGAR", "Sugar", "Sugars"],
            Self::SaturatedFat => &["FASAT", "FattyAcids,Saturated", "FAT_SAT", "SaturatedFat"],
            Self::TransFat => &["FATRN", "TransFattyAcids", "FAT_TRANS", "TransFat"],
            Self::Sodium => &["NA", "SODIUM", "Na"],
            Self::Potassium => &["K", "POTASSIUM"],
            Self::Fiber => &["FIBTG", "FIBER", "Fiber"],
        }
    }

    /// Stable snake-case name used as a warning metric
    #[must_use]
    pub const fn metric_name(self) -> &'static str {
        match self {
            Self::Energy => "energy_kcal",
            Self::Carbohydrate => "carbohydrate_g",
            Self::Protein => "protein_g",
            Self::Fat => "fat_g",
            Self::Alcohol => "alcohol_g",
            Self::AddedSugar => "added_sugars_g",
            Self::TotalSugar => "total_sugars_g",
            Self::SaturatedFat => "saturated_fat_g",
            Self::TransFat => "trans_fat_g",
            Self::Sodium => "sodium_mg",
            Self::Potassium => "potassium_mg",
            Self::Fiber => "fiber_g",
        }
    }
}

/// Declarative nutrient access for [`NutrientProfile`]
pub trait NutrientLookup {
    /// Value of a logical nutrient, `0.0` when not reported
    fn get(&self, nutrient: Nutrient) -> f64;

    /// Item energy in kcal, reconstructed from macronutrients when not reported
    ///
    /// Uses 4 kcal/g carbohydrate, 4 kcal/g protein, 9 kcal/g fat and 7 kcal/g alcohol.
    /// May still be `0.0` when nothing energy-bearing is reported.
    fn energy_kcal(&self) -> f64 {
        let reported = self.get(Nutrient::Energy);
        if reported > 0.0 {
            return reported;
        }
        self.get(Nutrient::Carbohydrate).mul_add(
            KCAL_PER_G_CARBOHYDRATE,
            self.get(Nutrient::Protein).mul_add(
                KCAL_PER_G_PROTEIN,
                self.get(Nutrient::Fat).mul_add(
                    KCAL_PER_G_FAT,
                    self.get(Nutrient::Alcohol) * KCAL_PER_G_ALCOHOL,
                ),
            ),
        )
    }
}

impl NutrientLookup for NutrientProfile {
    fn get(&self, nutrient: Nutrient) -> f64 {
        pick(self, nutrient.aliases())
    }
}

/// First present value among `candidate_keys`, or `0.0`
///
/// Each candidate is tried exactly, then case-insensitively, then with `_` and `.`
/// treated as the same separator, before moving on to the next candidate.
#[must_use]
pub fn pick(profile: &NutrientProfile, candidate_keys: &[&str]) -> f64 {
    candidate_keys
        .iter()
        .find_map(|candidate| lookup_tolerant(profile, candidate))
        .unwrap_or(0.0)
}

fn lookup_tolerant(profile: &NutrientProfile, candidate: &str) -> Option<f64> {
    if let Some(value) = profile.get_exact(candidate) {
        return Some(value);
    }

    let lowered = candidate.to_lowercase();
    if let Some((_, value)) = profile
        .iter()
        .find(|(key, _)| key.to_lowercase() == lowered)
    {
        return Some(value);
    }

    let normalized = normalize_key(candidate);
    profile
        .iter()
        .find(|(key, _)| normalize_key(key) == normalized)
        .map(|(_, value)| value)
}

fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace('.', "_")
}
