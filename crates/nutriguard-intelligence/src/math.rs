// ABOUTME: Numeric helpers shared by the evaluator, scorer and aggregator
// ABOUTME: Two-decimal rounding and percent-of-goal arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round to 2 decimal places
#[must_use]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uncapped percent of goal with the goal-is-zero rule
///
/// A zero (or negative) goal yields 0 when nothing was consumed and 100 otherwise.
#[must_use]
pub(crate) fn percent_of_goal(consumed: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        if consumed <= 0.0 {
            0.0
        } else {
            100.0
        }
    } else {
        100.0 * consumed / goal
    }
}

/// Percent of goal capped at 100, with a zero goal yielding 0
#[must_use]
pub(crate) fn capped_percent_of_goal(consumed: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        0.0
    } else {
        (100.0 * consumed / goal).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert!((round2(83.333_333) - 83.33).abs() < f64::EPSILON);
        assert!((round2(39.130_434) - 39.13).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_zero_rules() {
        assert!(percent_of_goal(0.0, 0.0).abs() < f64::EPSILON);
        assert!((percent_of_goal(500.0, 0.0) - 100.0).abs() < f64::EPSILON);
        assert!((percent_of_goal(3000.0, 2000.0) - 150.0).abs() < f64::EPSILON);
        assert!(capped_percent_of_goal(500.0, 0.0).abs() < f64::EPSILON);
        assert!((capped_percent_of_goal(3000.0, 2000.0) - 100.0).abs() < f64::EPSILON);
    }
}
