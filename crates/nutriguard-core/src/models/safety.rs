// ABOUTME: Persisted food safety verdicts and their period-level aggregation
// ABOUTME: ItemSafetyRecord, SafetyBreakdown classification, and per-meal warning summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Separator used when warning messages are joined for persistence
pub const WARNING_SEPARATOR: &str = "; ";

/// The only safety information persisted with a logged item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSafetyRecord {
    /// Human label of the item
    pub item_label: String,
    /// No `high` or `caution` warning was produced
    pub safe: bool,
    /// Warning messages joined with `"; "`, empty when none
    pub warnings: String,
}

impl ItemSafetyRecord {
    /// Whether the record carries an explicit unsafe determination
    #[must_use]
    pub fn is_flagged_unsafe(&self) -> bool {
        !self.safe && !self.warnings.trim().is_empty()
    }

    /// Whether the record has no safe/unsafe determination at all
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        !self.safe && self.warnings.trim().is_empty()
    }
}

/// Counts of safe, unsafe and unknown items logged in a time window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyBreakdown {
    /// Items marked safe
    pub safe: u64,
    /// Items marked unsafe with at least one warning
    #[serde(rename = "unsafe")]
    pub unsafe_count: u64,
    /// Items with no safe/unsafe determination
    pub unknown: u64,
    /// All items in the window
    pub total: u64,
}

impl SafetyBreakdown {
    /// Build a breakdown from explicit counts; `total` is their sum
    #[must_use]
    pub const fn new(safe: u64, unsafe_count: u64, unknown: u64) -> Self {
        Self {
            safe,
            unsafe_count,
            unknown,
            total: safe + unsafe_count + unknown,
        }
    }

    /// Classify persisted item records
    ///
    /// Safe: `safe = true`. Unsafe: `safe = false` with non-empty warnings.
    /// Unknown: `safe = false` with no warnings recorded.
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ItemSafetyRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut breakdown, record| {
                if record.safe {
                    breakdown.safe += 1;
                } else if record.is_flagged_unsafe() {
                    breakdown.unsafe_count += 1;
                } else {
                    breakdown.unknown += 1;
                }
                breakdown.total += 1;
                breakdown
            })
    }

    /// Whether no item was logged in the window
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.safe == 0 && self.unsafe_count == 0 && self.unknown == 0
    }
}

/// Warning detail for one item inside a meal summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemWarningSummary {
    /// Human label of the item
    pub item_label: String,
    /// Persisted safe flag
    pub safe: bool,
    /// Persisted joined warning messages
    pub warnings: String,
}

/// Per-meal view of persisted item verdicts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealWarnings {
    /// True when no item in the meal is unsafe
    pub meal_safe: bool,
    /// Only the items that are unsafe or carry warnings
    pub warnings_by_item: Vec<ItemWarningSummary>,
}

impl MealWarnings {
    /// Summarize the records of one meal
    #[must_use]
    pub fn from_records(records: &[ItemSafetyRecord]) -> Self {
        let warnings_by_item: Vec<ItemWarningSummary> = records
            .iter()
            .filter(|record| !record.safe || !record.warnings.trim().is_empty())
            .map(|record| ItemWarningSummary {
                item_label: record.item_label.clone(),
                safe: record.safe,
                warnings: record.warnings.clone(),
            })
            .collect();

        Self {
            meal_safe: records.iter().all(|record| record.safe),
            warnings_by_item,
        }
    }
}
