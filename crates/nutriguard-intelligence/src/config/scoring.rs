// ABOUTME: Safety score smoothing configuration
// ABOUTME: Weight given to unknown items and the Beta prior applied to safe/unsafe counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Parameters of the Beta-prior smoothed safety score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyScoreConfig {
    /// Fraction of an unknown item counted as safe (0.5 = half credit)
    pub unknown_weight: f64,
    /// Prior pseudo-count of safe items
    pub prior_alpha: f64,
    /// Prior pseudo-count of unsafe items
    pub prior_beta: f64,
}

impl Default for SafetyScoreConfig {
    fn default() -> Self {
        Self {
            unknown_weight: 0.5,
            prior_alpha: 1.0,
            prior_beta: 1.0,
        }
    }
}

impl SafetyScoreConfig {
    /// Validate weight and prior ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the unknown weight is outside [0, 1]
    /// or a prior is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.unknown_weight) {
            return Err(ConfigError::ValueOutOfRange(
                "unknown_weight must be between 0.0 and 1.0",
            ));
        }
        if !self.prior_alpha.is_finite() || self.prior_alpha < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "prior_alpha must be a non-negative number",
            ));
        }
        if !self.prior_beta.is_finite() || self.prior_beta < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "prior_beta must be a non-negative number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_score_config_is_valid() {
        assert!(SafetyScoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_weight_out_of_range() {
        let config = SafetyScoreConfig {
            unknown_weight: 1.5,
            ..SafetyScoreConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
