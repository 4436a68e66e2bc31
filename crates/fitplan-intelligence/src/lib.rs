// ABOUTME: Health calculators, calorie planning, recommendation rules, and goal progress
// ABOUTME: Pure computation over fitplan-core models with configurable constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitplan Intelligence
//!
//! Data flows leaf to root:
//!
//! metric + profile → [`calculator`] → [`planner`] → [`recommendation_engine`]
//!
//! [`goal_progress`] is independent and runs whenever a goal and a current value exist.
//! Nothing in this crate performs I/O or holds mutable state.

/// BMI, BMR, TDEE, and related body composition formulas
pub mod calculator;
/// Numeric constants and their environment overrides
pub mod config;
/// Goal completion percentage
pub mod goal_progress;
/// Daily calorie target and macro split
pub mod planner;
/// BMI-band recommendation rules
pub mod recommendation_engine;

pub use calculator::{
    bmi, body_fat_navy, calculate_bmi, calculate_bmr, calculate_tdee, classify_bmi,
    daily_calories_estimate, ideal_weight_range, water_intake, BmiCategory, IdealWeightRange,
};
pub use config::{ConfigError, IntelligenceConfig};
pub use goal_progress::{goal_progress, progress_percent, GoalDirection};
pub use planner::{daily_calorie_target, macro_split, plan_for_profile, CaloriePlan, MacroGrams};
pub use recommendation_engine::{
    DietType, ExerciseTemplate, MealTemplate, RecommendationEngine, RecommendationResult,
    WorkoutType,
};
