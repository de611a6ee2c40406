// ABOUTME: End-to-end tests of the DGA evaluator and safety score through the public API
// ABOUTME: Checks serialized warning shape, custom thresholds, and score edge values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, profile};
use nutriguard::intelligence::food_safety::assess_messages;
use nutriguard::intelligence::{
    compute_safety_score, AssessmentContext, FoodSafetyConfig, FoodSafetyEvaluator,
    SafetyScoreConfig, WarningCode,
};
use nutriguard::models::{ItemSafetyRecord, SafetyBreakdown};
use serde_json::Value;

#[test]
fn test_assessment_serializes_tagged_warnings() {
    init_test_logging();
    let config = FoodSafetyConfig::default();
    let context = AssessmentContext::builder()
        .age_years(30)
        .item_label("frosted pastry")
        .build()
        .unwrap();
    let p = profile(&[("ENERC_KCAL", 200.0), ("SUGAR.added", 25.0), ("NA", 900.0)]);

    let assessment = FoodSafetyEvaluator::new(&config).evaluate(&p, &context);
    let json: Value = serde_json::to_value(&assessment).unwrap();

    assert_eq!(json["safe"], Value::Bool(false));
    let warnings = json["warnings"].as_array().unwrap();
    let first = &warnings[0];
    assert_eq!(first["code"], "added_sugars_high_item");
    assert_eq!(first["severity"], "high");
    assert!(first["message"].as_str().unwrap().contains("50%"));
    assert!(warnings
        .iter()
        .any(|w| w["code"] == "sodium_high" && w["severity"] == "caution"));
}

#[test]
fn test_custom_sodium_limit_changes_verdict() {
    init_test_logging();
    let mut config = FoodSafetyConfig::default();
    config.sodium.adult_limit_mg = 5000.0;
    let context = AssessmentContext::builder().age_years(40).build().unwrap();
    let p = profile(&[("NA", 900.0)]);

    let strict = FoodSafetyEvaluator::new(&FoodSafetyConfig::default()).evaluate(&p, &context);
    let relaxed = FoodSafetyEvaluator::new(&config).evaluate(&p, &context);

    assert!(!strict.safe);
    assert!(relaxed.safe);
    assert!(relaxed.warnings.iter().all(|w| w.code != WarningCode::SodiumHigh));
}

#[test]
fn test_messages_only_assessment() {
    let context = AssessmentContext::builder().age_years(1).build().unwrap();
    let p = profile(&[("ENERC_KCAL", 100.0), ("SUGAR.added", 5.0)]);

    let messages = assess_messages(&p, &context, &FoodSafetyConfig::default());
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("under 2 years"));
}

#[test]
fn test_score_from_persisted_records() {
    let records = [
        ItemSafetyRecord {
            item_label: "apple".to_owned(),
            safe: true,
            warnings: String::new(),
        },
        ItemSafetyRecord {
            item_label: "chips".to_owned(),
            safe: false,
            warnings: "High sodium for one serving (26% of the 2300 mg daily limit).".to_owned(),
        },
        ItemSafetyRecord {
            item_label: "imported".to_owned(),
            safe: false,
            warnings: String::new(),
        },
    ];

    let breakdown = SafetyBreakdown::from_records(&records);
    assert_eq!(breakdown, SafetyBreakdown::new(1, 1, 1));

    let json: Value = serde_json::to_value(breakdown).unwrap();
    assert_eq!(json["unsafe"], 1);

    // (1 + 0.5 + 1) / (2 + 0.5 + 2)
    let score = compute_safety_score(&breakdown, &SafetyScoreConfig::default());
    assert!((score - 55.56).abs() < f64::EPSILON);
}
