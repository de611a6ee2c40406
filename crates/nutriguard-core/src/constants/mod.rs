// ABOUTME: Dietary guideline constants shared across the evaluator and analytics
// ABOUTME: Energy conversion factors, DGA citation helpers, and display units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants organized by domain.

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_G_CARBOHYDRATE: f64 = 4.0;
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Alcohol: 7 kcal/g
    pub const KCAL_PER_G_ALCOHOL: f64 = 7.0;
    /// Sugars count as carbohydrate energy
    pub const KCAL_PER_G_SUGAR: f64 = KCAL_PER_G_CARBOHYDRATE;

    /// Daily energy intake assumed when the consumer gives no calorie target
    pub const DEFAULT_CALORIE_TARGET_KCAL: f64 = 2000.0;
}

/// Citations for the Dietary Guidelines for Americans, 2020-2025
pub mod references {
    /// Base title used in every citation
    pub const DGA_TITLE: &str = "Dietary Guidelines for Americans, 2020-2025";

    /// Added sugar limits for children under two
    pub const ADDED_SUGARS_INFANTS: &str = "Ch.1, p.19 (limits)";
    /// Added sugar limit (10% of daily calories)
    pub const ADDED_SUGARS_LIMIT: &str = "Ch.1, p.41-42 (limits)";
    /// Sugar-sweetened beverage sources and strategies
    pub const SUGAR_SWEETENED_BEVERAGES: &str = "Ch.1, p.42 (sources/strategies)";
    /// Saturated fat limit and swaps
    pub const SATURATED_FAT_LIMIT: &str = "Ch.1, p.44-46 (limit & swaps)";
    /// Trans fat note
    pub const TRANS_FAT: &str = "Ch.1, p.45 (trans fat note)";
    /// Sodium chronic disease risk reduction intake
    pub const SODIUM_CDRR: &str = "Ch.1, p.47 (CDRR)";
    /// Sodium CDRR combined with the 20% daily value label convention
    pub const SODIUM_CDRR_LABEL: &str = "Ch.1, p.47 (CDRR) + Label 20% high";
    /// Potassium as a nutrient of public health concern
    pub const POTASSIUM: &str = "Ch.1, p.37 (nutrients of public health concern)";
    /// Acceptable macronutrient distribution ranges
    pub const AMDR: &str = "Appendix 1 (AMDR)";
    /// Dietary fiber
    pub const FIBER: &str = "Ch.1, p.37 (dietary fiber)";
    /// Whole and refined grains
    pub const GRAINS: &str = "Ch.1, p.36-37 (grains)";
    /// Nutrient-dense foods and energy density
    pub const NUTRIENT_DENSITY: &str = "Ch.1, p.13-16 (nutrient density)";

    /// Build a citation string for a chapter/page location
    #[must_use]
    pub fn dga(location: &str) -> String {
        format!("{DGA_TITLE}: {location}")
    }
}

/// Display units for tracked daily metrics
pub mod units {
    /// Energy
    pub const KCAL: &str = "kcal";
    /// Mass in grams
    pub const GRAMS: &str = "g";
    /// Mass in milligrams
    pub const MILLIGRAMS: &str = "mg";
    /// Hydration is tracked as glasses of water
    pub const GLASSES: &str = "glasses";
    /// Exercise is tracked in minutes
    pub const MINUTES: &str = "minutes";
}
