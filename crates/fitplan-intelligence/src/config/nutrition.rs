// ABOUTME: Nutrition configuration for BMR, TDEE, calorie targets, and macro splits
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, goal adjustments, and energy densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use fitplan_core::models::{ActivityLevel, FitnessGoal, Gender};
use serde::{Deserialize, Serialize};

/// Nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments applied to TDEE per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Percentage macro split per goal
    pub macro_splits: MacroSplitConfig,
    /// Energy density of each macronutrient
    pub energy_density: EnergyDensityConfig,
}

impl NutritionConfig {
    /// Validate all nutrition sections
    ///
    /// # Errors
    ///
    /// Returns an error if a macro split does not sum to 100 or a factor is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.macro_splits.validate()?;
        for level in ActivityLevel::ALL {
            if self.activity_factors.factor_for(level) <= 0.0 {
                return Err(ConfigError::InvalidRange(format!(
                    "activity factor for {level} must be positive"
                )));
            }
        }
        if self.goal_adjustments.weight_loss_deficit_kcal < 0.0
            || self.goal_adjustments.muscle_gain_surplus_kcal < 0.0
        {
            return Err(ConfigError::InvalidRange(
                "goal calorie adjustments must not be negative".to_owned(),
            ));
        }
        Ok(())
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Sex-specific constant
    #[must_use]
    pub const fn constant_for(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training and physical job): 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for a level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Calorie adjustment applied to TDEE for each goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Deficit subtracted for weight loss (500 kcal)
    pub weight_loss_deficit_kcal: f64,
    /// Surplus added for muscle gain (300 kcal)
    pub muscle_gain_surplus_kcal: f64,
    /// Granularity the daily target is rounded to (10 kcal)
    pub rounding_step_kcal: f64,
}

impl GoalAdjustmentConfig {
    /// Signed offset for a goal
    #[must_use]
    pub fn offset_for(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::WeightLoss => -self.weight_loss_deficit_kcal,
            FitnessGoal::Maintenance => 0.0,
            FitnessGoal::MuscleGain => self.muscle_gain_surplus_kcal,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss_deficit_kcal: 500.0,
            muscle_gain_surplus_kcal: 300.0,
            rounding_step_kcal: 10.0,
        }
    }
}

/// Macro distribution (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    const fn total(self) -> u8 {
        self.protein_pct
            .saturating_add(self.carbs_pct)
            .saturating_add(self.fat_pct)
    }
}

/// Percentage macro split per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Weight loss: 40/30/30
    pub weight_loss: MacroDistribution,
    /// Maintenance: 30/40/30
    pub maintenance: MacroDistribution,
    /// Muscle gain: 30/50/20
    pub muscle_gain: MacroDistribution,
}

impl MacroSplitConfig {
    /// Distribution for a goal
    #[must_use]
    pub const fn distribution_for(&self, goal: FitnessGoal) -> MacroDistribution {
        match goal {
            FitnessGoal::WeightLoss => self.weight_loss,
            FitnessGoal::Maintenance => self.maintenance,
            FitnessGoal::MuscleGain => self.muscle_gain,
        }
    }

    /// Validate that every split sums to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first split that doesn't sum to 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("weight_loss", self.weight_loss),
            ("maintenance", self.maintenance),
            ("muscle_gain", self.muscle_gain),
        ];

        for (name, split) in splits {
            let sum = split.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroDistribution::new(40, 30, 30),
            maintenance: MacroDistribution::new(30, 40, 30),
            muscle_gain: MacroDistribution::new(30, 50, 20),
        }
    }
}

/// Energy per gram of each macronutrient (Atwater factors)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyDensityConfig {
    /// Protein: 4 kcal/g
    pub protein_kcal_per_g: f64,
    /// Carbohydrates: 4 kcal/g
    pub carbs_kcal_per_g: f64,
    /// Fat: 9 kcal/g
    pub fat_kcal_per_g: f64,
}

impl Default for EnergyDensityConfig {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: 4.0,
            carbs_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_splits_are_valid() {
        assert!(MacroSplitConfig::default().validate().is_ok());
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_split_is_named() {
        let config = MacroSplitConfig {
            maintenance: MacroDistribution {
                protein_pct: 30,
                carbs_pct: 30,
                fat_pct: 30,
            },
            ..MacroSplitConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("maintenance"));
        assert!(err.to_string().contains("90"));
    }
}
