// ABOUTME: Validated body measurement value types
// ABOUTME: BodyWeight and Height only hold finite, positive, humanly plausible values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted body weights in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 1.0..=700.0;

/// Accepted standing heights in centimeters
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 30.0..=300.0;

/// Body weight in kilograms, guaranteed finite and within [`WEIGHT_KG_RANGE`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BodyWeight(f64);

impl BodyWeight {
    /// Create a validated weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `kg` is not finite or not positive, and
    /// `ValueOutOfRange` if it falls outside [`WEIGHT_KG_RANGE`]
    pub fn from_kg(kg: f64) -> Result<Self, AppError> {
        if !kg.is_finite() || kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weight must be a positive number of kilograms, got {kg}"
            )));
        }
        if !WEIGHT_KG_RANGE.contains(&kg) {
            return Err(AppError::out_of_range(format!(
                "Weight must be between {} and {} kg, got {kg}",
                WEIGHT_KG_RANGE.start(),
                WEIGHT_KG_RANGE.end()
            )));
        }
        Ok(Self(kg))
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn kg(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for BodyWeight {
    type Error = AppError;

    fn try_from(kg: f64) -> Result<Self, Self::Error> {
        Self::from_kg(kg)
    }
}

impl From<BodyWeight> for f64 {
    fn from(weight: BodyWeight) -> Self {
        weight.0
    }
}

/// Standing height, stored in centimeters, guaranteed finite and within [`HEIGHT_CM_RANGE`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Height(f64);

impl Height {
    /// Create a validated height from meters
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `meters` is not finite or not positive, and
    /// `ValueOutOfRange` outside the plausible range
    pub fn from_meters(meters: f64) -> Result<Self, AppError> {
        if !meters.is_finite() || meters <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be a positive number, got {meters} m"
            )));
        }
        Self::from_cm(meters * 100.0)
    }

    /// Create a validated height from centimeters
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `cm` is not finite or not positive, and
    /// `ValueOutOfRange` if it falls outside [`HEIGHT_CM_RANGE`]
    pub fn from_cm(cm: f64) -> Result<Self, AppError> {
        if !cm.is_finite() || cm <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Height must be a positive number, got {cm} cm"
            )));
        }
        if !HEIGHT_CM_RANGE.contains(&cm) {
            return Err(AppError::out_of_range(format!(
                "Height must be between {} and {} cm, got {cm}",
                HEIGHT_CM_RANGE.start(),
                HEIGHT_CM_RANGE.end()
            )));
        }
        Ok(Self(cm))
    }

    /// Height in meters
    #[must_use]
    pub fn meters(self) -> f64 {
        self.0 / 100.0
    }

    /// Height in centimeters
    #[must_use]
    pub const fn cm(self) -> f64 {
        self.0
    }
}
