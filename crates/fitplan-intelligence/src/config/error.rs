// ABOUTME: Configuration error types for intelligence config validation
// ABOUTME: Defines error variants for invalid ranges, weights, and unparsable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds out of order or value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Percentages don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
