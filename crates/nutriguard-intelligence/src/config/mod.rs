// ABOUTME: Configuration module for nutriguard-intelligence crate
// ABOUTME: Re-exports evaluator thresholds, score smoothing parameters, and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error type
pub mod error;
/// Food safety rule thresholds
pub mod food_safety;
/// Safety score smoothing parameters
pub mod scoring;

pub use error::ConfigError;
pub use food_safety::{
    AmdrConfig, CalorieShareLimits, EnergyConfig, EnergyDensityConfig, FiberConfig,
    FoodSafetyConfig, GrainConfig, SaturatedFatConfig, SodiumConfig, SugarConfig,
    TransFatConfig,
};
pub use scoring::SafetyScoreConfig;
