// ABOUTME: User profile model with closed enums for gender, activity level, and fitness goal
// ABOUTME: Unknown enum values are rejected at construction instead of silently defaulted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::measurements::Height;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor and Navy formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 kcal BMR offset)
    Male,
    /// Female (-161 kcal BMR offset)
    Female,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized gender '{other}' (expected male or female)"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level for TDEE multipliers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    #[serde(alias = "very active")]
    VeryActive,
}

impl ActivityLevel {
    /// All levels, lowest first
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_input(format!(
                "Unrecognized activity level '{s}' (expected sedentary, light, moderate, active or very_active)"
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fitness goal driving the calorie target and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FitnessGoal {
    /// Caloric deficit
    #[serde(rename = "weight loss", alias = "weight_loss")]
    WeightLoss,
    /// Caloric balance
    #[serde(rename = "maintenance")]
    Maintenance,
    /// Caloric surplus
    #[serde(rename = "muscle gain", alias = "muscle_gain")]
    MuscleGain,
}

impl FitnessGoal {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle gain",
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "weight loss" => Ok(Self::WeightLoss),
            "maintenance" => Ok(Self::Maintenance),
            "muscle gain" => Ok(Self::MuscleGain),
            _ => Err(AppError::invalid_input(format!(
                "Unrecognized goal '{s}' (expected weight loss, maintenance or muscle gain)"
            ))),
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calculator inputs stored on the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Declared goal
    pub goal: FitnessGoal,
}

impl UserProfile {
    /// Validate field ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive height or an age outside 1..=120, and
    /// `ValueOutOfRange` for an implausible height
    pub fn validate(&self) -> Result<(), AppError> {
        Height::from_cm(self.height_cm)?;
        if !(1..=120).contains(&self.age) {
            return Err(AppError::invalid_input(
                "Age must be between 1 and 120 years",
            ));
        }
        Ok(())
    }
}
