// ABOUTME: BMI-band rule engine producing diet and workout recommendations
// ABOUTME: Classifies the latest metric into an archetype with tips, macros, and meal/exercise templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation rule engine
//!
//! The engine is stateless: the same metric and profile always yield the same result.
//!
//! | BMI band      | Diet          | BMR multiplier | Protein g/kg | Workout            |
//! |---------------|---------------|----------------|--------------|--------------------|
//! | < 18.5        | weight gain   | 1.5            | 2.2          | strength focused   |
//! | 18.5 to < 25  | maintenance   | 1.3            | 1.8          | balanced           |
//! | >= 25         | weight loss   | 1.1            | 2.0          | fat loss focused   |

use crate::calculator::{
    calculate_bmr, classify_bmi, daily_calories_estimate, ideal_weight_range, water_intake,
    BmiCategory, IdealWeightRange,
};
use crate::config::{ArchetypeConfig, IntelligenceConfig};
use crate::planner::{macro_split, plan_for_profile, CaloriePlan, MacroGrams};
use fitplan_core::errors::AppResult;
use fitplan_core::models::{
    BodyWeight, FitnessGoal, Height, HealthMetric, MealType, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Diet archetype selected from the BMI band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietType {
    /// Underweight: caloric surplus
    #[serde(rename = "weight gain")]
    WeightGain,
    /// Healthy: caloric balance
    #[serde(rename = "maintenance")]
    Maintenance,
    /// Overweight or obese: caloric deficit
    #[serde(rename = "weight loss")]
    WeightLoss,
}

impl DietType {
    /// Archetype for a BMI category
    #[must_use]
    pub const fn for_category(category: BmiCategory) -> Self {
        match category {
            BmiCategory::Underweight => Self::WeightGain,
            BmiCategory::Normal => Self::Maintenance,
            BmiCategory::Overweight | BmiCategory::Obese => Self::WeightLoss,
        }
    }

    /// Planner goal whose percentage split backs this archetype
    #[must_use]
    pub const fn planner_goal(self) -> FitnessGoal {
        match self {
            Self::WeightGain => FitnessGoal::MuscleGain,
            Self::Maintenance => FitnessGoal::Maintenance,
            Self::WeightLoss => FitnessGoal::WeightLoss,
        }
    }

    /// Paired workout archetype
    #[must_use]
    pub const fn workout_type(self) -> WorkoutType {
        match self {
            Self::WeightGain => WorkoutType::StrengthFocused,
            Self::Maintenance => WorkoutType::Balanced,
            Self::WeightLoss => WorkoutType::FatLossFocused,
        }
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightGain => "weight gain",
            Self::Maintenance => "maintenance",
            Self::WeightLoss => "weight loss",
        }
    }

    const fn tips(self) -> [&'static str; 4] {
        match self {
            Self::WeightGain => [
                "Increase caloric intake with nutrient-dense foods",
                "Focus on protein-rich foods like lean meats, eggs, and legumes",
                "Include healthy fats from avocados, nuts, and olive oil",
                "Eat more frequently, 5-6 smaller meals throughout the day",
            ],
            Self::Maintenance => [
                "Maintain a balanced diet with whole foods",
                "Include a variety of fruits and vegetables for micronutrients",
                "Stay hydrated with at least 8 glasses of water daily",
                "Balance macronutrients with each meal",
            ],
            Self::WeightLoss => [
                "Create a moderate calorie deficit (300-500 calories below maintenance)",
                "Increase protein intake to preserve muscle mass",
                "Focus on fiber-rich foods for satiety",
                "Reduce refined carbohydrates and added sugars",
            ],
        }
    }

    const fn meals(self) -> [(MealType, &'static str, &'static str); 4] {
        match self {
            Self::WeightGain => [
                (
                    MealType::Breakfast,
                    "Power Oatmeal",
                    "Oatmeal with peanut butter, banana, and whole milk",
                ),
                (
                    MealType::Lunch,
                    "Chicken Rice Bowl",
                    "Chicken and brown rice bowl with avocado and black beans",
                ),
                (
                    MealType::Dinner,
                    "Salmon and Sweet Potato",
                    "Baked salmon with sweet potato and olive oil roasted vegetables",
                ),
                (
                    MealType::Snack,
                    "Yogurt and Nuts",
                    "Greek yogurt with mixed nuts and honey",
                ),
            ],
            Self::Maintenance => [
                (
                    MealType::Breakfast,
                    "Breakfast",
                    "Greek yogurt with berries and granola",
                ),
                (
                    MealType::Lunch,
                    "Lunch",
                    "Grilled chicken salad with olive oil dressing",
                ),
                (
                    MealType::Dinner,
                    "Dinner",
                    "Baked salmon with quinoa and steamed vegetables",
                ),
                (
                    MealType::Snack,
                    "Snack",
                    "Apple slices with almond butter",
                ),
            ],
            Self::WeightLoss => [
                (
                    MealType::Breakfast,
                    "Veggie Omelette",
                    "Egg white omelette with spinach, peppers, and mushrooms",
                ),
                (
                    MealType::Lunch,
                    "Turkey Lettuce Wraps",
                    "Lean turkey and crunchy vegetables in lettuce wraps",
                ),
                (
                    MealType::Dinner,
                    "White Fish and Greens",
                    "Grilled white fish with steamed green vegetables",
                ),
                (
                    MealType::Snack,
                    "Hummus and Crudites",
                    "Carrot and cucumber sticks with hummus",
                ),
            ],
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workout archetype paired with a diet archetype
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    /// Compound lifts, little cardio, progressive overload
    #[serde(rename = "strength focused")]
    StrengthFocused,
    /// Mixed cardio and strength with flexibility work
    #[serde(rename = "balanced")]
    Balanced,
    /// HIIT, high weekly activity volume, active recovery
    #[serde(rename = "fat loss focused")]
    FatLossFocused,
}

impl WorkoutType {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrengthFocused => "strength focused",
            Self::Balanced => "balanced",
            Self::FatLossFocused => "fat loss focused",
        }
    }

    const fn tips(self) -> [&'static str; 4] {
        match self {
            Self::StrengthFocused => [
                "Focus on compound movements like squats, deadlifts, and bench press",
                "Limit cardio to 1-2 sessions per week of 20-30 minutes",
                "Prioritize resistance training with progressive overload",
                "Ensure adequate rest between workouts (48-72 hours per muscle group)",
            ],
            Self::Balanced => [
                "Mix of cardio and strength training",
                "Include flexibility exercises 2-3 times per week",
                "Try interval training for efficiency",
                "Consider adding recreational activities like hiking or swimming",
            ],
            Self::FatLossFocused => [
                "Include both cardio and strength training",
                "Try HIIT workouts for efficient calorie burning",
                "Aim for 150+ minutes of moderate activity per week",
                "Include active recovery days with walking or light activities",
            ],
        }
    }

    fn exercises(self) -> Vec<ExerciseTemplate> {
        match self {
            Self::StrengthFocused => vec![
                ExerciseTemplate::sets_reps("Squats", 4, 8),
                ExerciseTemplate::sets_reps("Deadlifts", 4, 6),
                ExerciseTemplate::sets_reps("Bench Press", 4, 8),
                ExerciseTemplate::sets_reps("Overhead Press", 3, 10),
            ],
            Self::Balanced => vec![
                ExerciseTemplate::sets_reps("Squats", 3, 12),
                ExerciseTemplate::sets_reps("Push-ups", 3, 10),
                ExerciseTemplate::sets_reps("Lunges", 3, 10),
                ExerciseTemplate::timed("Brisk Jog", 20),
                ExerciseTemplate::sets_reps("Sun Salutations", 3, 5),
            ],
            Self::FatLossFocused => vec![
                ExerciseTemplate::sets_reps("Jumping Jacks", 4, 30),
                ExerciseTemplate::sets_reps("Burpees", 4, 15),
                ExerciseTemplate::sets_reps("Squats", 3, 12),
                ExerciseTemplate::timed("Brisk Walk", 30),
            ],
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested meal with its share of the daily calories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Slot in the day
    pub meal_type: MealType,
    /// Display name
    pub name: String,
    /// What to eat
    pub description: String,
    /// Calories allotted to this meal
    pub calories: u32,
}

/// Suggested exercise, counted either in sets and reps or in minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    /// Exercise name
    pub name: String,
    /// Number of sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Continuous duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl ExerciseTemplate {
    fn sets_reps(name: &str, sets: u32, reps: u32) -> Self {
        Self {
            name: name.to_owned(),
            sets: Some(sets),
            reps: Some(reps),
            duration_minutes: None,
        }
    }

    fn timed(name: &str, minutes: u32) -> Self {
        Self {
            name: name.to_owned(),
            sets: None,
            reps: None,
            duration_minutes: Some(minutes),
        }
    }
}

/// Complete recommendation derived from one metric and one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// BMI the archetype was selected from
    pub bmi: f64,
    /// WHO category of that BMI
    pub bmi_category: BmiCategory,
    /// Diet archetype
    pub diet_type: DietType,
    /// `round(BMR x archetype multiplier)`
    pub daily_calories: u32,
    /// Protein seeded from body weight, fat from a calorie share, carbs from the remainder
    pub macros: MacroGrams,
    /// Static diet tips for the archetype
    pub diet_tips: Vec<String>,
    /// Workout archetype
    pub workout_type: WorkoutType,
    /// Suggested training frequency
    pub workout_frequency: String,
    /// Static workout tips for the archetype
    pub workout_tips: Vec<String>,
    /// Default meals sized from `daily_calories`
    pub meal_templates: Vec<MealTemplate>,
    /// Default exercises for the workout archetype
    pub exercise_templates: Vec<ExerciseTemplate>,
    /// Goal-driven plan from the declared profile goal and activity level
    pub nutrition_plan: CaloriePlan,
    /// `round(BMR x activity factor)` with no goal adjustment
    pub estimated_daily_calories: u32,
    /// Weight range of the healthy BMI band at the check-in height
    pub ideal_weight: IdealWeightRange,
    /// Recommended daily water intake in liters
    pub water_intake_l: f64,
}

/// Rule engine over the intelligence configuration
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: IntelligenceConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine backed by the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Generate recommendations from the latest metric and the profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the metric or profile fails calculator validation
    pub fn recommend(
        &self,
        metric: &HealthMetric,
        profile: &UserProfile,
    ) -> AppResult<RecommendationResult> {
        let weight = BodyWeight::from_kg(metric.weight_kg)?;
        let height = Height::from_cm(metric.height_cm)?;
        let category = classify_bmi(metric.bmi, &self.config.body_composition.bmi);
        let diet_type = DietType::for_category(category);
        let workout_type = diet_type.workout_type();
        let archetype = self.archetype(diet_type);

        let bmr = calculate_bmr(
            weight.kg(),
            height.cm(),
            profile.age,
            profile.gender,
            &self.config.nutrition.bmr,
        )?;
        let daily_calories = (bmr * archetype.bmr_multiplier).round() as u32;
        let macros = self.seeded_macros(daily_calories, weight, archetype, diet_type);
        let nutrition_plan = plan_for_profile(profile, weight, &self.config.nutrition)?;
        let estimated_daily_calories =
            daily_calories_estimate(profile, weight, &self.config.nutrition)?;
        let body = &self.config.body_composition;

        info!(
            bmi = metric.bmi,
            category = %category,
            diet_type = %diet_type,
            daily_calories,
            "Generated recommendation"
        );

        Ok(RecommendationResult {
            bmi: metric.bmi,
            bmi_category: category,
            diet_type,
            daily_calories,
            macros,
            diet_tips: diet_type.tips().map(str::to_owned).to_vec(),
            workout_type,
            workout_frequency: self.config.recommendation.workout_frequency.clone(),
            workout_tips: workout_type.tips().map(str::to_owned).to_vec(),
            meal_templates: self.meal_templates(diet_type, daily_calories),
            exercise_templates: workout_type.exercises(),
            nutrition_plan,
            estimated_daily_calories,
            ideal_weight: ideal_weight_range(height, &body.ideal_weight),
            water_intake_l: water_intake(weight, profile.activity_level, &body.water_intake),
        })
    }

    const fn archetype(&self, diet_type: DietType) -> &ArchetypeConfig {
        let rec = &self.config.recommendation;
        match diet_type {
            DietType::WeightGain => &rec.weight_gain,
            DietType::Maintenance => &rec.maintenance,
            DietType::WeightLoss => &rec.weight_loss,
        }
    }

    /// Protein from g/kg, fat from the configured calorie share, carbs from what is left.
    /// When protein and fat alone exceed the budget the goal's percentage split is used.
    fn seeded_macros(
        &self,
        daily_calories: u32,
        weight: BodyWeight,
        archetype: &ArchetypeConfig,
        diet_type: DietType,
    ) -> MacroGrams {
        let density = &self.config.nutrition.energy_density;
        let kcal = f64::from(daily_calories);

        let protein_g = (weight.kg() * archetype.protein_g_per_kg).round();
        let fat_g = (kcal * self.config.recommendation.fat_calorie_share / density.fat_kcal_per_g)
            .round();
        let remaining =
            kcal - protein_g * density.protein_kcal_per_g - fat_g * density.fat_kcal_per_g;

        if remaining < 0.0 {
            debug!(
                protein_g,
                fat_g,
                daily_calories,
                "Seeded macros exceed budget, using percentage split"
            );
            return macro_split(
                daily_calories,
                diet_type.planner_goal(),
                &self.config.nutrition.macro_splits,
                density,
            );
        }

        MacroGrams {
            protein_g: protein_g as u32,
            carbs_g: (remaining / density.carbs_kcal_per_g).round() as u32,
            fat_g: fat_g as u32,
        }
    }

    fn meal_templates(&self, diet_type: DietType, daily_calories: u32) -> Vec<MealTemplate> {
        let shares = &self.config.recommendation.meal_shares;
        diet_type
            .meals()
            .into_iter()
            .map(|(meal_type, name, description)| {
                let pct = match meal_type {
                    MealType::Breakfast => shares.breakfast_pct,
                    MealType::Lunch => shares.lunch_pct,
                    MealType::Dinner => shares.dinner_pct,
                    MealType::Snack => shares.snack_pct,
                };
                MealTemplate {
                    meal_type,
                    name: name.to_owned(),
                    description: description.to_owned(),
                    calories: (f64::from(daily_calories) * f64::from(pct) / 100.0).round()
                        as u32,
                }
            })
            .collect()
    }
}
