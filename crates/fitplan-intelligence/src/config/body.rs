// ABOUTME: Body composition configuration: BMI bands, ideal weight range, hydration
// ABOUTME: WHO BMI thresholds and per-activity water intake adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use fitplan_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};

/// Body composition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// BMI category thresholds
    pub bmi: BmiThresholdsConfig,
    /// Healthy BMI range used for the ideal weight range
    pub ideal_weight: IdealWeightConfig,
    /// Daily water intake recommendation
    pub water_intake: WaterIntakeConfig,
}

impl BodyCompositionConfig {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when thresholds are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmi = &self.bmi;
        if !(0.0 < bmi.underweight_below
            && bmi.underweight_below < bmi.overweight_from
            && bmi.overweight_from < bmi.obese_from)
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be ascending: underweight < overweight < obese".to_owned(),
            ));
        }
        if self.ideal_weight.min_bmi >= self.ideal_weight.max_bmi {
            return Err(ConfigError::InvalidRange(
                "ideal_weight.min_bmi must be < ideal_weight.max_bmi".to_owned(),
            ));
        }
        Ok(())
    }
}

/// BMI category thresholds; each band includes its lower bound
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholdsConfig {
    /// Below this value: underweight (18.5)
    pub underweight_below: f64,
    /// From this value: overweight (25.0)
    pub overweight_from: f64,
    /// From this value: obese (30.0)
    pub obese_from: f64,
}

impl Default for BmiThresholdsConfig {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            overweight_from: 25.0,
            obese_from: 30.0,
        }
    }
}

/// Healthy BMI range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightConfig {
    /// Lower bound (18.5)
    pub min_bmi: f64,
    /// Upper bound (24.9)
    pub max_bmi: f64,
}

impl Default for IdealWeightConfig {
    fn default() -> Self {
        Self {
            min_bmi: 18.5,
            max_bmi: 24.9,
        }
    }
}

/// Water intake: base liters per kg plus a fixed liter adjustment per activity level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterIntakeConfig {
    /// Base intake per kilogram (0.033 L)
    pub liters_per_kg: f64,
    /// Extra liters when sedentary
    pub sedentary_extra_l: f64,
    /// Extra liters for light activity
    pub light_extra_l: f64,
    /// Extra liters for moderate activity
    pub moderate_extra_l: f64,
    /// Extra liters when active
    pub active_extra_l: f64,
    /// Extra liters when very active
    pub very_active_extra_l: f64,
}

impl WaterIntakeConfig {
    /// Extra liters for a level
    #[must_use]
    pub const fn extra_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary_extra_l,
            ActivityLevel::Light => self.light_extra_l,
            ActivityLevel::Moderate => self.moderate_extra_l,
            ActivityLevel::Active => self.active_extra_l,
            ActivityLevel::VeryActive => self.very_active_extra_l,
        }
    }
}

impl Default for WaterIntakeConfig {
    fn default() -> Self {
        Self {
            liters_per_kg: 0.033,
            sedentary_extra_l: 0.0,
            light_extra_l: 0.3,
            moderate_extra_l: 0.5,
            active_extra_l: 0.7,
            very_active_extra_l: 1.0,
        }
    }
}
