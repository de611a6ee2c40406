// ABOUTME: Domain service layer composing persistence, alerts, and the intelligence crate
// ABOUTME: Protocol-agnostic async services reusable from a CLI, REST handlers, or jobs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services receive their collaborators (`Arc<dyn NutritionStore>`, `Arc<dyn AlertSink>`)
//! from the composition root. All evaluation and aggregation is delegated to the pure
//! `nutriguard-intelligence` crate.

/// User notification seam for risky items
pub mod alerts;

/// Range summary, weekly overview, and today progress over stored totals
pub mod analytics;

/// Item evaluation at log time and per-meal warning summaries
pub mod meal_safety;

/// Persistence seam for goals, daily totals, and item safety records
pub mod store;
