// ABOUTME: Beta-prior smoothed safety score over safe, unsafe, and unknown item counts
// ABOUTME: Produces a single 0-100 trust percentage for a period of logged items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unknown items earn partial credit (`unknown_weight`) and pseudo-counts `alpha`
//! (safe) and `beta` (unsafe) keep the score well-defined for small samples:
//!
//! ```text
//! safe_eff  = safe + unknown_weight * unknown + alpha
//! total_eff = (safe + unsafe) + unknown_weight * unknown + alpha + beta
//! score     = 100 * safe_eff / total_eff
//! ```
//!
//! A period with no logged items scores 100: no evidence of harm.

use crate::config::SafetyScoreConfig;
use crate::math::round2;
use crate::models::SafetyBreakdown;

/// Smoothed safe-item percentage rounded to 2 decimals, in `[0, 100]`
#[must_use]
pub fn score(breakdown: &SafetyBreakdown, unknown_weight: f64, alpha: f64, beta: f64) -> f64 {
    if breakdown.is_empty() {
        return 100.0;
    }

    let safe = breakdown.safe as f64;
    let unsafe_count = breakdown.unsafe_count as f64;
    let unknown = breakdown.unknown as f64;

    let safe_eff = unknown_weight.mul_add(unknown, safe) + alpha;
    let total_eff = unknown_weight.mul_add(unknown, safe + unsafe_count) + alpha + beta;

    if total_eff <= 0.0 {
        return 100.0;
    }
    round2((100.0 * safe_eff / total_eff).clamp(0.0, 100.0))
}

/// Score a breakdown with configured smoothing parameters
#[must_use]
pub fn compute_safety_score(breakdown: &SafetyBreakdown, config: &SafetyScoreConfig) -> f64 {
    score(
        breakdown,
        config.unknown_weight,
        config.prior_alpha,
        config.prior_beta,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_items_scores_full_trust() {
        let empty = SafetyBreakdown::default();
        assert!((score(&empty, 0.5, 1.0, 1.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nine_safe_one_unsafe() {
        let breakdown = SafetyBreakdown::new(9, 1, 0);
        assert!((score(&breakdown, 0.5, 1.0, 1.0) - 83.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_items_get_partial_credit() {
        // (0 + 0.5*4 + 1) / (0 + 2 + 1 + 1) = 3 / 4
        let breakdown = SafetyBreakdown::new(0, 0, 4);
        assert!((score(&breakdown, 0.5, 1.0, 1.0) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_unsafe_without_prior() {
        let breakdown = SafetyBreakdown::new(0, 5, 0);
        assert!(score(&breakdown, 0.5, 0.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compute_with_config_defaults() {
        let breakdown = SafetyBreakdown::new(9, 1, 0);
        let config = SafetyScoreConfig::default();
        assert!((compute_safety_score(&breakdown, &config) - 83.33).abs() < f64::EPSILON);
    }
}
