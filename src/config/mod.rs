// ABOUTME: Environment-driven configuration for the food safety evaluator and safety score
// ABOUTME: Loads DGA defaults, applies NUTRIGUARD_* overrides, validates, and caches a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Defaults follow the Dietary Guidelines for Americans 2020-2025. Selected values can be
//! overridden via environment variables with the `NUTRIGUARD_` prefix (see
//! [`crate::constants::env_config`]).

use crate::constants::env_config;
use nutriguard_intelligence::config::{ConfigError, FoodSafetyConfig, SafetyScoreConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Evaluator thresholds and score smoothing, loaded together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Food safety rule thresholds
    pub food_safety: FoodSafetyConfig,
    /// Safety score smoothing parameters
    pub safety_score: SafetyScoreConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.food_safety.validate()?;
        self.safety_score.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::DEFAULT_CALORIE_TARGET,
            &mut self.food_safety.energy.default_calorie_target_kcal,
        )?;
        Self::apply_env_var(
            env_config::SODIUM_ADULT_LIMIT_MG,
            &mut self.food_safety.sodium.adult_limit_mg,
        )?;
        Self::apply_env_var(
            env_config::TRANS_FAT_HIGH_G,
            &mut self.food_safety.trans_fat.high_g,
        )?;

        Self::apply_env_var(
            env_config::SAFETY_UNKNOWN_WEIGHT,
            &mut self.safety_score.unknown_weight,
        )?;
        Self::apply_env_var(
            env_config::SAFETY_PRIOR_ALPHA,
            &mut self.safety_score.prior_alpha,
        )?;
        Self::apply_env_var(
            env_config::SAFETY_PRIOR_BETA,
            &mut self.safety_score.prior_beta,
        )?;

        Ok(self)
    }
}
