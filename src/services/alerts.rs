// ABOUTME: User notification seam for food items that meet an alert trigger condition
// ABOUTME: AlertSink trait and a TracingAlertSink that records alerts as structured warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::intelligence::AlertTrigger;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Notification raised for one risky item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAlert {
    /// User who logged the item
    pub user_id: Uuid,
    /// Meal the item belongs to
    pub meal_id: Uuid,
    /// Human label of the item
    pub item_label: String,
    /// Condition that fired
    pub trigger: AlertTrigger,
    /// Joined warning messages of the item
    pub message: String,
}

/// Delivery channel for safety alerts
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver one alert
    async fn emit(&self, alert: SafetyAlert) -> AppResult<()>;
}

/// Alert sink that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

#[async_trait]
impl AlertSink for TracingAlertSink {
    async fn emit(&self, alert: SafetyAlert) -> AppResult<()> {
        warn!(
            user.id = %alert.user_id,
            meal.id = %alert.meal_id,
            item.label = %alert.item_label,
            trigger = ?alert.trigger,
            "Food safety alert: {}",
            alert.message
        );
        Ok(())
    }
}
