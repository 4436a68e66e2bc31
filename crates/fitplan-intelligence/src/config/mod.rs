// ABOUTME: Intelligence configuration root with environment overrides and validation
// ABOUTME: Process-wide singleton loaded once, falling back to defaults on invalid overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the health calculators and the recommendation engine
//!
//! Defaults reproduce the published formulas. A handful of knobs can be tuned via
//! environment variables:
//!
//! - `FITPLAN_WEIGHT_LOSS_DEFICIT_KCAL`
//! - `FITPLAN_MUSCLE_GAIN_SURPLUS_KCAL`
//! - `FITPLAN_RECOMMENDATION_FAT_SHARE`

/// Body composition thresholds
pub mod body;
/// Configuration error type
pub mod error;
/// Nutrition coefficients and macro splits
pub mod nutrition;
/// Recommendation archetype knobs
pub mod recommendation;

pub use body::{BmiThresholdsConfig, BodyCompositionConfig, IdealWeightConfig, WaterIntakeConfig};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, EnergyDensityConfig, GoalAdjustmentConfig,
    MacroDistribution, MacroSplitConfig, NutritionConfig,
};
pub use recommendation::{ArchetypeConfig, MealSharesConfig, RecommendationConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Root configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// BMR, TDEE, goal adjustments, and macro splits
    pub nutrition: NutritionConfig,
    /// BMI bands, ideal weight, hydration
    pub body_composition: BodyCompositionConfig,
    /// Recommendation archetypes
    pub recommendation: RecommendationConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.body_composition.validate()?;
        self.recommendation.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "FITPLAN_WEIGHT_LOSS_DEFICIT_KCAL",
            &mut self.nutrition.goal_adjustments.weight_loss_deficit_kcal,
        )?;
        Self::apply_env_var(
            "FITPLAN_MUSCLE_GAIN_SURPLUS_KCAL",
            &mut self.nutrition.goal_adjustments.muscle_gain_surplus_kcal,
        )?;
        Self::apply_env_var(
            "FITPLAN_RECOMMENDATION_FAT_SHARE",
            &mut self.recommendation.fat_calorie_share,
        )?;
        Ok(self)
    }
}
