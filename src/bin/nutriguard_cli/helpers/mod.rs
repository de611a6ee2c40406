// ABOUTME: Shared helpers for nutriguard-cli commands
// ABOUTME: JSON file input, JSON stdout output, and the local calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod json;
