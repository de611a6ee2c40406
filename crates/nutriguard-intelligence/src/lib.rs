// ABOUTME: Food safety evaluation, safety scoring, and nutrition progress aggregation
// ABOUTME: Pure computation crate: no I/O, no locks, configuration passed by reference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGuard` Intelligence
//!
//! Evaluates single consumed items against the Dietary Guidelines for Americans and turns
//! per-day nutrient totals into goal-relative progress views.
//!
//! ## Components
//!
//! - **`nutrient_picker`**: tolerant lookup over loosely-keyed nutrient maps
//! - **`food_safety`**: ordered DGA rule evaluation producing severity-tagged warnings
//! - **`safety_score`**: Beta-prior smoothed safe-item percentage
//! - **`progress`**: range summaries, weekly chart/detailed views, and the capped today view
//! - **`date_window`**: week boundaries, default ranges, date parsing, local day bounds
//!
//! Everything in this crate is side-effect free; independent evaluations may run in
//! parallel (see [`food_safety::FoodSafetyEvaluator::evaluate_batch`]).

pub use nutriguard_core::{constants, errors, models};

/// Threshold and smoothing configuration
pub mod config;
/// Calendar windowing helpers
pub mod date_window;
/// DGA-aligned food safety rules
pub mod food_safety;
/// Tolerant nutrient lookup and alias table
pub mod nutrient_picker;
/// Goal-relative progress aggregation
pub mod progress;
/// Smoothed safety score
pub mod safety_score;

mod math;

pub use config::{ConfigError, FoodSafetyConfig, SafetyScoreConfig};
pub use date_window::DateRange;
pub use food_safety::{
    AlertTrigger, AssessmentContext, FoodAssessment, FoodSafetyEvaluator, Severity, Warning,
    WarningCode,
};
pub use nutrient_picker::{pick, Nutrient};
pub use progress::{OverviewMode, ProgressAggregator, RangeSummary, WeekView};
pub use safety_score::{compute_safety_score, score};
