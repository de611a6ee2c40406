// ABOUTME: Application-level constants for the NutriGuard service layer and CLI
// ABOUTME: Service identity and environment variable names for configuration overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dietary constants live in `nutriguard_core::constants`; this module only holds what the
//! service layer needs.

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "nutriguard";

/// Environment variables overriding the intelligence configuration
pub mod env_config {
    /// Daily calorie target used when the consumer gives none (kcal)
    pub const DEFAULT_CALORIE_TARGET: &str = "NUTRIGUARD_DEFAULT_CALORIE_TARGET";
    /// Credit given to items without a safety determination (0.0 to 1.0)
    pub const SAFETY_UNKNOWN_WEIGHT: &str = "NUTRIGUARD_SAFETY_UNKNOWN_WEIGHT";
    /// Prior pseudo-count of safe items
    pub const SAFETY_PRIOR_ALPHA: &str = "NUTRIGUARD_SAFETY_PRIOR_ALPHA";
    /// Prior pseudo-count of unsafe items
    pub const SAFETY_PRIOR_BETA: &str = "NUTRIGUARD_SAFETY_PRIOR_BETA";
    /// Sodium limit for ages 14+ (mg/day)
    pub const SODIUM_ADULT_LIMIT_MG: &str = "NUTRIGUARD_SODIUM_ADULT_LIMIT_MG";
    /// Trans fat amount considered high (g)
    pub const TRANS_FAT_HIGH_G: &str = "NUTRIGUARD_TRANS_FAT_HIGH_G";
}
