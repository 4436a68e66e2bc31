// ABOUTME: Recommendation rule configuration per BMI archetype
// ABOUTME: Calorie multipliers, protein-per-kg seeds, fat share, and meal calorie shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Recommendation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Underweight archetype (BMI below the underweight threshold)
    pub weight_gain: ArchetypeConfig,
    /// Healthy archetype
    pub maintenance: ArchetypeConfig,
    /// Overweight and obese archetype
    pub weight_loss: ArchetypeConfig,
    /// Share of daily calories allocated to fat when seeding macros (0.28)
    pub fat_calorie_share: f64,
    /// Training frequency text attached to every recommendation
    pub workout_frequency: String,
    /// Share of daily calories per meal template
    pub meal_shares: MealSharesConfig,
}

impl RecommendationConfig {
    /// Validate multipliers and shares
    ///
    /// # Errors
    ///
    /// Returns an error when a multiplier is not positive, the fat share is outside (0, 1),
    /// or the meal shares don't sum to 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, archetype) in [
            ("weight_gain", &self.weight_gain),
            ("maintenance", &self.maintenance),
            ("weight_loss", &self.weight_loss),
        ] {
            if archetype.bmr_multiplier <= 0.0 || archetype.protein_g_per_kg <= 0.0 {
                return Err(ConfigError::InvalidRange(format!(
                    "{name} multiplier and protein per kg must be positive"
                )));
            }
        }
        if !(self.fat_calorie_share > 0.0 && self.fat_calorie_share < 1.0) {
            return Err(ConfigError::InvalidRange(format!(
                "fat_calorie_share must be between 0 and 1, got {}",
                self.fat_calorie_share
            )));
        }
        self.meal_shares.validate()
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            weight_gain: ArchetypeConfig {
                bmr_multiplier: 1.5,
                protein_g_per_kg: 2.2,
            },
            maintenance: ArchetypeConfig {
                bmr_multiplier: 1.3,
                protein_g_per_kg: 1.8,
            },
            weight_loss: ArchetypeConfig {
                bmr_multiplier: 1.1,
                protein_g_per_kg: 2.0,
            },
            fat_calorie_share: 0.28,
            workout_frequency: "3-4 times per week".to_owned(),
            meal_shares: MealSharesConfig::default(),
        }
    }
}

/// Numeric knobs for one archetype
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArchetypeConfig {
    /// Multiplier applied to BMR for the daily calorie figure
    pub bmr_multiplier: f64,
    /// Protein seed in grams per kg of body weight
    pub protein_g_per_kg: f64,
}

/// Percent of daily calories per meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MealSharesConfig {
    /// Breakfast (25%)
    pub breakfast_pct: u8,
    /// Lunch (35%)
    pub lunch_pct: u8,
    /// Dinner (30%)
    pub dinner_pct: u8,
    /// Snack (10%)
    pub snack_pct: u8,
}

impl MealSharesConfig {
    fn validate(self) -> Result<(), ConfigError> {
        let sum = u32::from(self.breakfast_pct)
            + u32::from(self.lunch_pct)
            + u32::from(self.dinner_pct)
            + u32::from(self.snack_pct);
        if sum == 100 {
            Ok(())
        } else {
            Err(ConfigError::InvalidWeights(format!(
                "meal shares must sum to 100, got {sum}"
            )))
        }
    }
}

impl Default for MealSharesConfig {
    fn default() -> Self {
        Self {
            breakfast_pct: 25,
            lunch_pct: 35,
            dinner_pct: 30,
            snack_pct: 10,
        }
    }
}
