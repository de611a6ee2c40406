// ABOUTME: Ordered DGA threshold rules applied to one consumed item
// ABOUTME: Sugars, saturated fat, sodium, trans fat, AMDR, fiber, grains, and energy density
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Each rule reads the pre-picked [`ItemFacts`] and appends to the warning list.
//! Rules run in a fixed order so identical inputs always give identical output.

use super::warning::{Severity, Warning, WarningCode};
use super::AssessmentContext;
use crate::config::{CalorieShareLimits, FoodSafetyConfig};
use crate::constants::energy::{
    KCAL_PER_G_CARBOHYDRATE, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, KCAL_PER_G_SUGAR,
};
use crate::math::round2;
use crate::models::NutrientProfile;
use crate::nutrient_picker::{Nutrient, NutrientLookup};

/// Nutrient values read once per evaluation
#[derive(Debug, Clone)]
pub(super) struct ItemFacts {
    pub kcal: f64,
    pub added_sugar_g: f64,
    pub total_sugar_g: f64,
    pub saturated_fat_g: f64,
    pub trans_fat_g: f64,
    pub sodium_mg: f64,
    pub potassium_mg: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub label: String,
}

impl ItemFacts {
    pub(super) fn read(profile: &NutrientProfile, context: &AssessmentContext) -> Self {
        Self {
            kcal: profile.energy_kcal(),
            added_sugar_g: profile.get(Nutrient::AddedSugar),
            total_sugar_g: profile.get(Nutrient::TotalSugar),
            saturated_fat_g: profile.get(Nutrient::SaturatedFat),
            trans_fat_g: profile.get(Nutrient::TransFat),
            sodium_mg: profile.get(Nutrient::Sodium),
            potassium_mg: profile.get(Nutrient::Potassium),
            carbs_g: profile.get(Nutrient::Carbohydrate),
            protein_g: profile.get(Nutrient::Protein),
            fat_g: profile.get(Nutrient::Fat),
            fiber_g: profile.get(Nutrient::Fiber),
            label: context.item_label().to_lowercase(),
        }
    }

    /// Terms are stored lowercase by `FoodSafetyConfig`
    fn label_mentions_any(&self, terms: &[String]) -> bool {
        !self.label.is_empty() && terms.iter().any(|term| self.label.contains(term.as_str()))
    }
}

/// Apply every rule in order
///
/// Without item energy the sugar, saturated fat and grain rules are skipped as a whole,
/// daily shares and label heuristics included.
pub(super) fn apply_all(
    facts: &ItemFacts,
    context: &AssessmentContext,
    config: &FoodSafetyConfig,
) -> Vec<Warning> {
    let calorie_target = context.effective_calorie_target(config);
    let has_energy = facts.kcal > 0.0;
    let mut warnings = Vec::new();

    if has_energy {
        sugar_rules(facts, context, config, calorie_target, &mut warnings);
        saturated_fat_rules(facts, config, calorie_target, &mut warnings);
    }
    sodium_rules(facts, context, config, &mut warnings);
    trans_fat_rule(facts, config, &mut warnings);
    amdr_rules(facts, config, &mut warnings);
    fiber_rule(facts, config, &mut warnings);
    if has_energy {
        grain_rule(facts, config, &mut warnings);
    }
    energy_density_rule(facts, context, config, &mut warnings);

    warnings
}

// ============================================================================
// Sugars
// ============================================================================

fn sugar_rules(
    facts: &ItemFacts,
    context: &AssessmentContext,
    config: &FoodSafetyConfig,
    calorie_target: f64,
    out: &mut Vec<Warning>,
) {
    let sugars = &config.sugars;
    let age = context.age_years();

    if age > 0 && age < sugars.infant_age_below_years {
        if facts.added_sugar_g > 0.0 {
            out.push(
                Warning::new(
                    WarningCode::AddedSugarsInfants,
                    Severity::High,
                    Nutrient::AddedSugar.metric_name(),
                    round2(facts.added_sugar_g),
                )
                .rendered(),
            );
        }
        return;
    }

    let item_limit_percent = sugars.limits.item_kcal_share_high * 100.0;
    if facts.added_sugar_g > 0.0 {
        let share = facts.added_sugar_g * KCAL_PER_G_SUGAR / facts.kcal;
        if share >= sugars.limits.item_kcal_share_high {
            out.push(item_share_warning(
                WarningCode::AddedSugarsHighItem,
                Severity::High,
                "added_sugar_pct_of_item_kcal",
                share,
                item_limit_percent,
            ));
        }
    } else if facts.total_sugar_g > 0.0 {
        let share = facts.total_sugar_g * KCAL_PER_G_SUGAR / facts.kcal;
        if share >= sugars.limits.item_kcal_share_high {
            out.push(item_share_warning(
                WarningCode::TotalSugarsProxyHigh,
                Severity::Caution,
                "total_sugar_pct_of_item_kcal",
                share,
                item_limit_percent,
            ));
        }
    }

    if facts.added_sugar_g > 0.0 {
        let daily_limit_g = sugars.limits.daily_fraction_of_kcal * calorie_target / KCAL_PER_G_SUGAR;
        if let Some(warning) = daily_share_warning(
            &sugars.limits,
            facts.added_sugar_g,
            daily_limit_g,
            Nutrient::AddedSugar,
            WarningCode::AddedSugarsVeryHighDailyShare,
            WarningCode::AddedSugarsHighDailyShare,
        ) {
            out.push(warning);
        }
    }

    let sugary = facts.added_sugar_g >= sugars.beverage_added_sugar_g
        || facts.total_sugar_g >= sugars.beverage_total_sugar_g;
    if context.is_beverage() && sugary && facts.kcal >= sugars.beverage_min_kcal {
        let (nutrient, grams) = if facts.added_sugar_g > 0.0 {
            (Nutrient::AddedSugar, facts.added_sugar_g)
        } else {
            (Nutrient::TotalSugar, facts.total_sugar_g)
        };
        out.push(
            Warning::new(
                WarningCode::SsbNudge,
                Severity::Info,
                nutrient.metric_name(),
                round2(grams),
            )
            .rendered(),
        );
    }
}

// ============================================================================
// Saturated fat
// ============================================================================

fn saturated_fat_rules(
    facts: &ItemFacts,
    config: &FoodSafetyConfig,
    calorie_target: f64,
    out: &mut Vec<Warning>,
) {
    let sat = &config.saturated_fat;

    if facts.saturated_fat_g <= 0.0 {
        if facts.label_mentions_any(&sat.source_terms) {
            out.push(
                Warning::new(
                    WarningCode::SatfatSourceHeuristic,
                    Severity::Info,
                    Nutrient::SaturatedFat.metric_name(),
                    0.0,
                )
                .rendered(),
            );
        }
        return;
    }

    let share = facts.saturated_fat_g * KCAL_PER_G_FAT / facts.kcal;
    if share >= sat.limits.item_kcal_share_high {
        out.push(item_share_warning(
            WarningCode::SatFatHighItem,
            Severity::High,
            "saturated_fat_pct_of_item_kcal",
            share,
            sat.limits.item_kcal_share_high * 100.0,
        ));
    }

    let daily_limit_g = sat.limits.daily_fraction_of_kcal * calorie_target / KCAL_PER_G_FAT;
    if let Some(warning) = daily_share_warning(
        &sat.limits,
        facts.saturated_fat_g,
        daily_limit_g,
        Nutrient::SaturatedFat,
        WarningCode::SatFatVeryHighDailyShare,
        WarningCode::SatFatHighDailyShare,
    ) {
        out.push(warning);
    }
}

// ============================================================================
// Sodium
// ============================================================================

fn sodium_rules(
    facts: &ItemFacts,
    context: &AssessmentContext,
    config: &FoodSafetyConfig,
    out: &mut Vec<Warning>,
) {
    if facts.sodium_mg <= 0.0 {
        return;
    }
    let sodium = &config.sodium;
    let daily_limit_mg = sodium.limit_for_age(context.age_years());

    let share = facts.sodium_mg / daily_limit_mg;
    let level = if share >= sodium.share_high {
        Some((WarningCode::SodiumVeryHigh, Severity::High))
    } else if share >= sodium.share_caution {
        Some((WarningCode::SodiumHigh, Severity::Caution))
    } else {
        None
    };
    if let Some((code, severity)) = level {
        out.push(
            Warning::new(
                code,
                severity,
                Nutrient::Sodium.metric_name(),
                round2(facts.sodium_mg),
            )
            .with_limit(daily_limit_mg)
            .with_percent_of_limit(round2(share * 100.0))
            .rendered(),
        );
    }

    if facts.kcal > 0.0 {
        let density = facts.sodium_mg / facts.kcal * 100.0;
        if density >= sodium.dense_mg_per_100kcal {
            out.push(
                Warning::new(
                    WarningCode::SodiumDense,
                    Severity::Info,
                    "sodium_mg_per_100kcal",
                    round2(density),
                )
                .with_limit(sodium.dense_mg_per_100kcal)
                .rendered(),
            );
        }
    }

    if facts.potassium_mg > 0.0 {
        let ratio = facts.sodium_mg / facts.potassium_mg;
        if ratio > sodium.potassium_ratio_max {
            out.push(
                Warning::new(
                    WarningCode::SodiumPotassiumRatioHigh,
                    Severity::Info,
                    "sodium_potassium_ratio",
                    round2(ratio),
                )
                .with_limit(sodium.potassium_ratio_max)
                .rendered(),
            );
        }
    }
}

// ============================================================================
// Trans fat
// ============================================================================

fn trans_fat_rule(facts: &ItemFacts, config: &FoodSafetyConfig, out: &mut Vec<Warning>) {
    if facts.trans_fat_g <= 0.0 {
        return;
    }
    let severity = if facts.trans_fat_g >= config.trans_fat.high_g {
        Severity::High
    } else {
        Severity::Caution
    };
    out.push(
        Warning::new(
            WarningCode::TransFatPresent,
            severity,
            Nutrient::TransFat.metric_name(),
            round2(facts.trans_fat_g),
        )
        .with_limit(config.trans_fat.high_g)
        .rendered(),
    );
}

// ============================================================================
// Macronutrient distribution
// ============================================================================

fn amdr_rules(facts: &ItemFacts, config: &FoodSafetyConfig, out: &mut Vec<Warning>) {
    if facts.carbs_g <= 0.0 && facts.protein_g <= 0.0 && facts.fat_g <= 0.0 {
        return;
    }
    let carbs_kcal = facts.carbs_g * KCAL_PER_G_CARBOHYDRATE;
    let protein_kcal = facts.protein_g * KCAL_PER_G_PROTEIN;
    let fat_kcal = facts.fat_g * KCAL_PER_G_FAT;
    let macro_kcal = carbs_kcal + protein_kcal + fat_kcal;
    if macro_kcal <= 0.0 {
        return;
    }

    let amdr = &config.amdr;
    let checks = [
        (
            WarningCode::AmdrCarbsOutOfRange,
            "carbohydrate_pct_of_macro_kcal",
            carbs_kcal,
            amdr.carbs_min_percent,
            amdr.carbs_max_percent,
        ),
        (
            WarningCode::AmdrProteinOutOfRange,
            "protein_pct_of_macro_kcal",
            protein_kcal,
            amdr.protein_min_percent,
            amdr.protein_max_percent,
        ),
        (
            WarningCode::AmdrFatOutOfRange,
            "fat_pct_of_macro_kcal",
            fat_kcal,
            amdr.fat_min_percent,
            amdr.fat_max_percent,
        ),
    ];

    for (code, metric, kcal, min_percent, max_percent) in checks {
        let share_percent = kcal / macro_kcal * 100.0;
        let crossed = if share_percent < min_percent {
            Some(min_percent)
        } else if share_percent > max_percent {
            Some(max_percent)
        } else {
            None
        };
        if let Some(bound) = crossed {
            out.push(
                Warning::new(code, Severity::Info, metric, round2(share_percent))
                    .with_limit(bound)
                    .rendered(),
            );
        }
    }
}

// ============================================================================
// Fiber, grains, energy density
// ============================================================================

fn fiber_rule(facts: &ItemFacts, config: &FoodSafetyConfig, out: &mut Vec<Warning>) {
    let fiber = &config.fiber;
    if facts.carbs_g < fiber.min_carbs_g || facts.fiber_g <= 0.0 || facts.kcal <= 0.0 {
        return;
    }
    let per_100kcal = facts.fiber_g / facts.kcal * 100.0;
    let finding = if per_100kcal < fiber.low_per_100kcal {
        Some((WarningCode::FiberLowDensity, fiber.low_per_100kcal))
    } else if per_100kcal >= fiber.good_per_100kcal {
        Some((WarningCode::FiberGoodSource, fiber.good_per_100kcal))
    } else {
        None
    };
    if let Some((code, threshold)) = finding {
        out.push(
            Warning::new(code, Severity::Info, "fiber_g_per_100kcal", round2(per_100kcal))
                .with_limit(threshold)
                .rendered(),
        );
    }
}

fn grain_rule(facts: &ItemFacts, config: &FoodSafetyConfig, out: &mut Vec<Warning>) {
    let grains = &config.grains;
    let code = if facts.label_mentions_any(&grains.whole_grain_terms) {
        WarningCode::WholeGrainPositive
    } else if facts.label_mentions_any(&grains.refined_grain_terms) {
        WarningCode::RefinedGrainNudge
    } else {
        return;
    };
    out.push(Warning::new(code, Severity::Info, "item_label", 0.0).rendered());
}

fn energy_density_rule(
    facts: &ItemFacts,
    context: &AssessmentContext,
    config: &FoodSafetyConfig,
    out: &mut Vec<Warning>,
) {
    let Some(serving_weight_g) = context.serving_weight_g() else {
        return;
    };
    if facts.kcal <= 0.0 {
        return;
    }
    let density = &config.energy_density;
    let kcal_per_100g = facts.kcal / serving_weight_g * 100.0;
    let finding = if kcal_per_100g >= density.very_high_kcal_per_100g {
        Some((WarningCode::EnergyDensityVeryHigh, density.very_high_kcal_per_100g))
    } else if kcal_per_100g >= density.high_kcal_per_100g {
        Some((WarningCode::EnergyDensityHigh, density.high_kcal_per_100g))
    } else {
        None
    };
    if let Some((code, threshold)) = finding {
        out.push(
            Warning::new(code, Severity::Info, "kcal_per_100g", round2(kcal_per_100g))
                .with_limit(threshold)
                .rendered(),
        );
    }
}

// ============================================================================
// Shared builders
// ============================================================================

fn item_share_warning(
    code: WarningCode,
    severity: Severity,
    metric: &str,
    share: f64,
    limit_percent: f64,
) -> Warning {
    Warning::new(code, severity, metric, round2(share * 100.0))
        .with_limit(limit_percent)
        .rendered()
}

fn daily_share_warning(
    limits: &CalorieShareLimits,
    grams: f64,
    daily_limit_g: f64,
    nutrient: Nutrient,
    very_high: WarningCode,
    high: WarningCode,
) -> Option<Warning> {
    if daily_limit_g <= 0.0 {
        return None;
    }
    let share = grams / daily_limit_g;
    let (code, severity) = if share >= limits.daily_share_high {
        (very_high, Severity::High)
    } else if share >= limits.daily_share_caution {
        (high, Severity::Caution)
    } else {
        return None;
    };
    Some(
        Warning::new(code, severity, nutrient.metric_name(), round2(grams))
            .with_limit(round2(daily_limit_g))
            .with_percent_of_limit(round2(share * 100.0))
            .rendered(),
    )
}
