// ABOUTME: Main library entry point for the NutriGuard nutrition safety platform
// ABOUTME: Wires configuration, logging, and async services around the pure intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGuard`
//!
//! Evaluates individual food items against the Dietary Guidelines for Americans 2020-2025
//! and aggregates a user's daily nutrient totals into progress views over time.
//!
//! ## Architecture
//!
//! - **`nutriguard-core`**: error types, DGA constants, and shared data models
//! - **`nutriguard-intelligence`**: pure evaluator, safety scorer, and progress aggregator
//! - **Config**: environment overrides on top of DGA defaults
//! - **Services**: async orchestration over a [`services::store::NutritionStore`] and an
//!   [`services::alerts::AlertSink`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriguard::config::IntelligenceConfig;
//! use nutriguard::intelligence::{AssessmentContext, FoodSafetyEvaluator};
//! use nutriguard::models::NutrientProfile;
//! use nutriguard::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = IntelligenceConfig::global();
//!     let profile = NutrientProfile::try_from_pairs([
//!         ("ENERC_KCAL", 200.0),
//!         ("SUGAR.added", 25.0),
//!         ("NA", 900.0),
//!     ])?;
//!     let context = AssessmentContext::builder().age_years(30).build()?;
//!     let assessment = FoodSafetyEvaluator::new(&config.food_safety).evaluate(&profile, &context);
//!     println!("safe: {}", assessment.safe);
//!     Ok(())
//! }
//! ```

/// Environment-driven evaluator and score configuration
pub mod config;

/// Service-level constants and environment variable names
pub mod constants;

/// Structured logging setup and event helpers
pub mod logging;

/// Async services composing the store, alert sink, and intelligence crate
pub mod services;

pub use nutriguard_core::{errors, models};
pub use nutriguard_intelligence as intelligence;
