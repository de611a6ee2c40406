// ABOUTME: Command implementations for nutriguard-cli
// ABOUTME: Item and meal assessment, range summary, weekly overview, and safety score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod assess;
pub mod progress;
