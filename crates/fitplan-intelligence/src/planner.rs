// ABOUTME: Daily calorie target and macronutrient gram split by fitness goal
// ABOUTME: Links BMR and TDEE from the calculator into a complete calorie plan for a profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie & Macro Planner
//!
//! Maps TDEE plus a declared goal to a daily calorie target, then allocates that target
//! across protein, carbohydrate, and fat by a fixed percentage split. Gram values are
//! rounded independently, so their calorie equivalent may differ from the target by a
//! few kcal.

use crate::calculator::{calculate_bmr, calculate_tdee, round_to_tenth};
use crate::config::{EnergyDensityConfig, GoalAdjustmentConfig, MacroSplitConfig, NutritionConfig};
use fitplan_core::errors::AppError;
use fitplan_core::models::{ActivityLevel, BodyWeight, FitnessGoal, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Macronutrient targets in whole grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGrams {
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
}

/// Full energy plan for a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriePlan {
    /// Goal the plan was built for
    pub goal: FitnessGoal,
    /// Activity level used for TDEE
    pub activity_level: ActivityLevel,
    /// Basal Metabolic Rate (kcal/day), one decimal
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day), one decimal
    pub tdee: f64,
    /// Goal-adjusted daily calorie target, multiple of the rounding step
    pub daily_calories: u32,
    /// Gram split of the daily target
    pub macros: MacroGrams,
}

/// Goal-adjusted daily calorie target
///
/// - weight loss: TDEE - 500
/// - maintenance: TDEE
/// - muscle gain: TDEE + 300
///
/// Rounded to the nearest 10 kcal.
///
/// # Errors
///
/// Returns `InvalidInput` if TDEE is not positive or the deficit leaves no calories
pub fn daily_calorie_target(
    tdee: f64,
    goal: FitnessGoal,
    config: &GoalAdjustmentConfig,
) -> Result<u32, AppError> {
    if !tdee.is_finite() || tdee <= 0.0 {
        return Err(AppError::invalid_input("TDEE must be positive"));
    }

    let adjusted = tdee + config.offset_for(goal);
    let step = config.rounding_step_kcal.max(1.0);
    let rounded = (adjusted / step).round() * step;

    if rounded <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "Calorie target for {goal} is not positive (TDEE {tdee:.0} kcal)"
        )));
    }
    Ok(rounded as u32)
}

/// Split daily calories into macronutrient grams by the goal's percentage split
///
/// Grams = calories x pct / kcal-per-gram, each rounded to the nearest gram.
#[must_use]
pub fn macro_split(
    calories: u32,
    goal: FitnessGoal,
    splits: &MacroSplitConfig,
    density: &EnergyDensityConfig,
) -> MacroGrams {
    let split = splits.distribution_for(goal);
    let kcal = f64::from(calories);
    let grams = |pct: u8, kcal_per_g: f64| (kcal * f64::from(pct) / 100.0 / kcal_per_g).round() as u32;

    MacroGrams {
        protein_g: grams(split.protein_pct, density.protein_kcal_per_g),
        carbs_g: grams(split.carbs_pct, density.carbs_kcal_per_g),
        fat_g: grams(split.fat_pct, density.fat_kcal_per_g),
    }
}

/// Build the complete BMR, TDEE, target, and macro plan for a profile
///
/// # Errors
///
/// Returns `InvalidInput` if the profile or weight fails calculator validation
pub fn plan_for_profile(
    profile: &UserProfile,
    weight: BodyWeight,
    config: &NutritionConfig,
) -> Result<CaloriePlan, AppError> {
    let bmr = calculate_bmr(
        weight.kg(),
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;
    let daily_calories = daily_calorie_target(tdee, profile.goal, &config.goal_adjustments)?;
    let macros = macro_split(
        daily_calories,
        profile.goal,
        &config.macro_splits,
        &config.energy_density,
    );

    debug!(
        goal = %profile.goal,
        activity = %profile.activity_level,
        bmr,
        tdee,
        daily_calories,
        "Built calorie plan"
    );

    Ok(CaloriePlan {
        goal: profile.goal,
        activity_level: profile.activity_level,
        bmr: round_to_tenth(bmr),
        tdee: round_to_tenth(tdee),
        daily_calories,
        macros,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitplan_core::models::Gender;

    #[test]
    fn test_weight_loss_target() {
        let config = GoalAdjustmentConfig::default();
        assert_eq!(
            daily_calorie_target(2000.0, FitnessGoal::WeightLoss, &config).unwrap(),
            1500
        );
        assert_eq!(
            daily_calorie_target(2000.0, FitnessGoal::MuscleGain, &config).unwrap(),
            2300
        );
    }

    #[test]
    fn test_target_rounds_to_nearest_ten() {
        let config = GoalAdjustmentConfig::default();
        assert_eq!(
            daily_calorie_target(2594.31, FitnessGoal::Maintenance, &config).unwrap(),
            2590
        );
        assert_eq!(
            daily_calorie_target(2596.0, FitnessGoal::Maintenance, &config).unwrap(),
            2600
        );
    }

    #[test]
    fn test_target_rejects_non_positive_results() {
        let config = GoalAdjustmentConfig::default();
        assert!(daily_calorie_target(0.0, FitnessGoal::Maintenance, &config).is_err());
        assert!(daily_calorie_target(400.0, FitnessGoal::WeightLoss, &config).is_err());
    }

    #[test]
    fn test_maintenance_macro_split() {
        let macros = macro_split(
            2000,
            FitnessGoal::Maintenance,
            &MacroSplitConfig::default(),
            &EnergyDensityConfig::default(),
        );
        assert_eq!(
            macros,
            MacroGrams {
                protein_g: 150,
                carbs_g: 200,
                fat_g: 67
            }
        );
    }

    #[test]
    fn test_goal_specific_splits() {
        let splits = MacroSplitConfig::default();
        let density = EnergyDensityConfig::default();

        let loss = macro_split(2000, FitnessGoal::WeightLoss, &splits, &density);
        assert_eq!((loss.protein_g, loss.carbs_g, loss.fat_g), (200, 150, 67));

        let gain = macro_split(2000, FitnessGoal::MuscleGain, &splits, &density);
        assert_eq!((gain.protein_g, gain.carbs_g, gain.fat_g), (150, 250, 44));
    }

    #[test]
    fn test_plan_for_profile_chains_calculator() {
        let profile = UserProfile {
            age: 30,
            gender: Gender::Male,
            height_cm: 175.0,
            activity_level: ActivityLevel::Moderate,
            goal: FitnessGoal::WeightLoss,
        };
        let plan = plan_for_profile(
            &profile,
            BodyWeight::from_kg(70.0).unwrap(),
            &NutritionConfig::default(),
        )
        .unwrap();

        assert!((plan.bmr - 1673.8).abs() < 1e-9);
        assert!((plan.tdee - 2594.3).abs() < 1e-9);
        // 2594.3125 - 500 = 2094.3 -> 2090
        assert_eq!(plan.daily_calories, 2090);
        assert_eq!(plan.macros.protein_g, 209);
    }
}
