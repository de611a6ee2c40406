// ABOUTME: Core types and constants for the NutriGuard nutrition safety platform
// ABOUTME: Foundation crate with error handling, nutrition value models, and DGA constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriGuard` Core
//!
//! Foundation crate providing shared types and constants for the `NutriGuard`
//! food safety evaluator and progress analytics. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Dietary guideline constants (energy factors, references, units)
//! - **models**: Value objects exchanged between the evaluator, the aggregator and callers

/// Unified error handling system with standard error codes
pub mod errors;

/// Dietary guideline constants organized by domain
pub mod constants;

/// Nutrition and safety value models
pub mod models;
