// ABOUTME: Unified error types shared by the evaluator, aggregator and service layer
// ABOUTME: Defines ErrorCode and AppError with source chaining
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Validation problems
//! (bad date ranges, unknown view modes, negative quantities) are reported immediately and
//! never retried; missing data is not an error and never reaches this module.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    InvalidInput = 3000,
    /// Input could not be parsed (dates, view modes)
    InvalidFormat = 3002,

    // External Services (5000-5999)
    /// A collaborator (alert channel, nutrient source) failed
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// Configuration failed validation
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Persistence collaborator failure
    DatabaseError = 9001,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::DatabaseError => "Database operation failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Input that could not be parsed
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Persistence failure reported by a store implementation
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_creation() {
        let error = AppError::invalid_input("`to` must be on/after `from`");
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.to_string().contains("`to` must be on/after `from`"));
        assert!(error.to_string().starts_with("The provided input is invalid"));
    }

    #[test]
    fn test_external_service_names_collaborator() {
        let error = AppError::external_service("alert_sink", "channel closed");
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert_eq!(error.message, "alert_sink: channel closed");
    }

    #[test]
    fn test_source_is_chained() {
        let parse = "2025-13-01".parse::<u32>().unwrap_err();
        let error = AppError::invalid_format("invalid week_start").with_source(parse);
        assert!(error.source.is_some());
    }
}
