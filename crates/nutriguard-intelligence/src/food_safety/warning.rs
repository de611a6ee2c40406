// ABOUTME: Structured food safety warnings with severity, metric values, and DGA citations
// ABOUTME: Human messages are rendered from the structured fields in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::references;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is
///
/// Ordered so that `Severity::High > Severity::Caution > Severity::Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational nudge, does not affect the safe flag
    Info,
    /// Worth attention, makes the item unsafe
    Caution,
    /// Clearly outside guidance, makes the item unsafe
    High,
}

impl Severity {
    /// Whether a warning at this severity makes an item unsafe
    #[must_use]
    pub const fn marks_unsafe(self) -> bool {
        matches!(self, Self::Caution | Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Caution => "caution",
            Self::High => "high",
        })
    }
}

/// Stable identifier of each rule outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    /// Added sugar given to a child under two
    AddedSugarsInfants,
    /// Added sugars supply at least 10% of the item's calories
    AddedSugarsHighItem,
    /// Total sugars (added not reported) supply at least 10% of the item's calories
    TotalSugarsProxyHigh,
    /// One serving uses at least 40% of the daily added sugar limit
    AddedSugarsVeryHighDailyShare,
    /// One serving uses at least 20% of the daily added sugar limit
    AddedSugarsHighDailyShare,
    /// Sugar-sweetened beverage
    SsbNudge,
    /// Saturated fat supplies at least 10% of the item's calories
    SatFatHighItem,
    /// One serving uses at least 40% of the daily saturated fat limit
    SatFatVeryHighDailyShare,
    /// One serving uses at least 20% of the daily saturated fat limit
    SatFatHighDailyShare,
    /// Saturated fat unreported but the label names a typical source
    SatfatSourceHeuristic,
    /// One serving uses at least 40% of the daily sodium limit
    SodiumVeryHigh,
    /// One serving uses at least 20% of the daily sodium limit
    SodiumHigh,
    /// At least 400 mg sodium per 100 kcal
    SodiumDense,
    /// Sodium to potassium ratio above 1.5
    SodiumPotassiumRatioHigh,
    /// Any trans fat
    TransFatPresent,
    /// Carbohydrate share of macro energy outside the AMDR
    AmdrCarbsOutOfRange,
    /// Protein share of macro energy outside the AMDR
    AmdrProteinOutOfRange,
    /// Fat share of macro energy outside the AMDR
    AmdrFatOutOfRange,
    /// Little fiber for a carbohydrate-rich item
    FiberLowDensity,
    /// Good fiber source
    FiberGoodSource,
    /// Label names a whole grain
    WholeGrainPositive,
    /// Label names a refined grain
    RefinedGrainNudge,
    /// At least 275 kcal per 100 g
    EnergyDensityVeryHigh,
    /// At least 150 kcal per 100 g
    EnergyDensityHigh,
}

impl WarningCode {
    /// Snake-case identifier, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddedSugarsInfants => "added_sugars_infants",
            Self::AddedSugarsHighItem => "added_sugars_high_item",
            Self::TotalSugarsProxyHigh => "total_sugars_proxy_high",
            Self::AddedSugarsVeryHighDailyShare => "added_sugars_very_high_daily_share",
            Self::AddedSugarsHighDailyShare => "added_sugars_high_daily_share",
            Self::SsbNudge => "ssb_nudge",
            Self::SatFatHighItem => "sat_fat_high_item",
            Self::SatFatVeryHighDailyShare => "sat_fat_very_high_daily_share",
            Self::SatFatHighDailyShare => "sat_fat_high_daily_share",
            Self::SatfatSourceHeuristic => "satfat_source_heuristic",
            Self::SodiumVeryHigh => "sodium_very_high",
            Self::SodiumHigh => "sodium_high",
            Self::SodiumDense => "sodium_dense",
            Self::SodiumPotassiumRatioHigh => "sodium_potassium_ratio_high",
            Self::TransFatPresent => "trans_fat_present",
            Self::AmdrCarbsOutOfRange => "amdr_carbs_out_of_range",
            Self::AmdrProteinOutOfRange => "amdr_protein_out_of_range",
            Self::AmdrFatOutOfRange => "amdr_fat_out_of_range",
            Self::FiberLowDensity => "fiber_low_density",
            Self::FiberGoodSource => "fiber_good_source",
            Self::WholeGrainPositive => "whole_grain_positive",
            Self::RefinedGrainNudge => "refined_grain_nudge",
            Self::EnergyDensityVeryHigh => "energy_density_very_high",
            Self::EnergyDensityHigh => "energy_density_high",
        }
    }

    /// DGA chapter/page location backing this finding
    #[must_use]
    pub const fn reference_location(self) -> &'static str {
        match self {
            Self::AddedSugarsInfants => references::ADDED_SUGARS_INFANTS,
            Self::AddedSugarsHighItem
            | Self::TotalSugarsProxyHigh
            | Self::AddedSugarsVeryHighDailyShare
            | Self::AddedSugarsHighDailyShare => references::ADDED_SUGARS_LIMIT,
            Self::SsbNudge => references::SUGAR_SWEETENED_BEVERAGES,
            Self::SatFatHighItem
            | Self::SatFatVeryHighDailyShare
            | Self::SatFatHighDailyShare
            | Self::SatfatSourceHeuristic => references::SATURATED_FAT_LIMIT,
            Self::SodiumVeryHigh | Self::SodiumDense => references::SODIUM_CDRR,
            Self::SodiumHigh => references::SODIUM_CDRR_LABEL,
            Self::SodiumPotassiumRatioHigh => references::POTASSIUM,
            Self::TransFatPresent => references::TRANS_FAT,
            Self::AmdrCarbsOutOfRange | Self::AmdrProteinOutOfRange | Self::AmdrFatOutOfRange => {
                references::AMDR
            }
            Self::FiberLowDensity | Self::FiberGoodSource => references::FIBER,
            Self::WholeGrainPositive | Self::RefinedGrainNudge => references::GRAINS,
            Self::EnergyDensityVeryHigh | Self::EnergyDensityHigh => {
                references::NUTRIENT_DENSITY
            }
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured finding about a consumed item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// Rule outcome identifier
    pub code: WarningCode,
    /// Seriousness
    pub severity: Severity,
    /// Human text rendered from the fields below
    pub message: String,
    /// Name of the evaluated quantity
    pub metric: String,
    /// Value of the evaluated quantity
    pub value: f64,
    /// Threshold the value was compared against, `0` when not applicable
    pub limit: f64,
    /// Value as a percent of the daily limit, `0` when not applicable
    pub percent_of_limit: f64,
    /// DGA citation
    pub reference: String,
}

impl Warning {
    /// Start a warning for `metric` with its evaluated `value`
    pub(crate) fn new(
        code: WarningCode,
        severity: Severity,
        metric: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            code,
            severity,
            message: String::new(),
            metric: metric.into(),
            value,
            limit: 0.0,
            percent_of_limit: 0.0,
            reference: references::dga(code.reference_location()),
        }
    }

    /// Record the threshold the value was compared against
    #[must_use]
    pub(crate) const fn with_limit(mut self, limit: f64) -> Self {
        self.limit = limit;
        self
    }

    /// Record the value as a percent of its daily limit
    #[must_use]
    pub(crate) const fn with_percent_of_limit(mut self, percent: f64) -> Self {
        self.percent_of_limit = percent;
        self
    }

    /// Fill in the human message from the structured fields
    #[must_use]
    pub(crate) fn rendered(mut self) -> Self {
        self.message = render_message(&self);
        self
    }
}

/// Render the human message for a warning from its structured fields
#[must_use]
pub fn render_message(warning: &Warning) -> String {
    let value = warning.value;
    let limit = warning.limit;
    let percent = warning.percent_of_limit;

    match warning.code {
        WarningCode::AddedSugarsInfants => format!(
            "For children under 2 years, avoid added sugars ({value:.1} g in this item)."
        ),
        WarningCode::AddedSugarsHighItem => {
            format!("High added sugars for this item ({value:.0}% of its calories).")
        }
        WarningCode::TotalSugarsProxyHigh => format!(
            "Likely high in added sugars (total sugars are {value:.0}% of item calories; added sugar not reported)."
        ),
        WarningCode::AddedSugarsVeryHighDailyShare => format!(
            "Very high added sugars for one serving ({percent:.0}% of the {limit:.0} g daily limit)."
        ),
        WarningCode::AddedSugarsHighDailyShare => format!(
            "High added sugars for one serving ({percent:.0}% of the {limit:.0} g daily limit)."
        ),
        WarningCode::SsbNudge => "Sugar-sweetened beverages are a major source of added sugars; consider lower-sugar options.".to_owned(),
        WarningCode::SatFatHighItem => {
            format!("High saturated fat for this item ({value:.0}% of its calories).")
        }
        WarningCode::SatFatVeryHighDailyShare => format!(
            "Very high saturated fat for one serving ({percent:.0}% of the {limit:.0} g daily limit)."
        ),
        WarningCode::SatFatHighDailyShare => format!(
            "High saturated fat for one serving ({percent:.0}% of the {limit:.0} g daily limit)."
        ),
        WarningCode::SatfatSourceHeuristic => "Saturated fat not reported, but this item is a typical source; consider swaps such as vegetable oils.".to_owned(),
        WarningCode::SodiumVeryHigh => format!(
            "Very high sodium for one serving ({percent:.0}% of the {limit:.0} mg daily limit)."
        ),
        WarningCode::SodiumHigh => format!(
            "High sodium for one serving ({percent:.0}% of the {limit:.0} mg daily limit)."
        ),
        WarningCode::SodiumDense => {
            format!("Sodium-dense item ({value:.0} mg per 100 kcal).")
        }
        WarningCode::SodiumPotassiumRatioHigh => format!(
            "Sodium outweighs potassium (ratio {value:.2}); potassium-rich foods help balance sodium."
        ),
        WarningCode::TransFatPresent => {
            format!("Contains trans fat ({value:.2}g); keep intake as low as possible.")
        }
        WarningCode::AmdrCarbsOutOfRange => amdr_message("Carbohydrates", value, limit),
        WarningCode::AmdrProteinOutOfRange => amdr_message("Protein", value, limit),
        WarningCode::AmdrFatOutOfRange => amdr_message("Fat", value, limit),
        WarningCode::FiberLowDensity => format!(
            "Low fiber for a carbohydrate-rich item ({value:.2} g per 100 kcal); whole-food options add fiber."
        ),
        WarningCode::FiberGoodSource => {
            format!("Good source of fiber ({value:.2} g per 100 kcal).")
        }
        WarningCode::WholeGrainPositive => "Whole grains are a good choice.".to_owned(),
        WarningCode::RefinedGrainNudge => {
            "Refined grain item; consider a whole-grain option.".to_owned()
        }
        WarningCode::EnergyDensityVeryHigh => format!(
            "Very energy-dense item ({value:.0} kcal per 100 g); mind the portion size."
        ),
        WarningCode::EnergyDensityHigh => {
            format!("Energy-dense item ({value:.0} kcal per 100 g).")
        }
    }
}

fn amdr_message(macro_name: &str, share_percent: f64, bound_percent: f64) -> String {
    let direction = if share_percent < bound_percent {
        "below"
    } else {
        "above"
    };
    format!(
        "{macro_name} supply {share_percent:.0}% of this item's macronutrient calories, {direction} the {bound_percent:.0}% bound of the recommended range."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Caution);
        assert!(Severity::Caution > Severity::Info);
        assert!(!Severity::Info.marks_unsafe());
        assert!(Severity::Caution.marks_unsafe());
    }

    #[test]
    fn test_code_serializes_snake_case() {
        let json = serde_json::to_string(&WarningCode::SodiumPotassiumRatioHigh).unwrap();
        assert_eq!(json, "\"sodium_potassium_ratio_high\"");
        assert_eq!(
            WarningCode::SodiumPotassiumRatioHigh.as_str(),
            "sodium_potassium_ratio_high"
        );
    }

    #[test]
    fn test_message_rendered_from_fields() {
        let warning = Warning::new(
            WarningCode::AddedSugarsHighItem,
            Severity::High,
            "added_sugar_pct_of_item_kcal",
            50.0,
        )
        .with_limit(10.0)
        .rendered();

        assert_eq!(
            warning.message,
            "High added sugars for this item (50% of its calories)."
        );
        assert!(warning.reference.starts_with(references::DGA_TITLE));
    }

    #[test]
    fn test_amdr_message_direction() {
        let below = Warning::new(
            WarningCode::AmdrFatOutOfRange,
            Severity::Info,
            "fat_pct_of_macro_kcal",
            5.0,
        )
        .with_limit(20.0)
        .rendered();
        assert!(below.message.contains("below the 20% bound"));
    }
}
