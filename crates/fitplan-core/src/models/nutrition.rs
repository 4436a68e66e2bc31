// ABOUTME: Diet plans and their meals
// ABOUTME: MealType classifies meals into breakfast, lunch, dinner, and snack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DietPlanId, MealId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Slot of a meal in the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between meals
    Snack,
}

/// A diet plan owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Unique plan identifier
    pub id: DietPlanId,
    /// Owner
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Daily calorie budget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<u32>,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl DietPlan {
    /// Build a plan from a creation payload
    #[must_use]
    pub fn from_new(new_plan: NewDietPlan) -> Self {
        Self {
            id: DietPlanId::new(),
            user_id: new_plan.user_id,
            name: new_plan.name,
            description: new_plan.description,
            total_calories: new_plan.total_calories,
            created_at: Utc::now(),
        }
    }
}

/// Diet plan creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDietPlan {
    /// Owner
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Daily calorie budget
    #[serde(default)]
    pub total_calories: Option<u32>,
}

/// One meal of a diet plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique meal identifier
    pub id: MealId,
    /// Parent plan
    pub diet_plan_id: DietPlanId,
    /// Display name
    pub name: String,
    /// Slot in the day
    pub meal_type: MealType,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Energy in kcal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Display time such as "8:00 AM"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_time: Option<String>,
    /// Food items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl Meal {
    /// Build a meal from a creation payload
    #[must_use]
    pub fn from_new(new_meal: NewMeal) -> Self {
        Self {
            id: MealId::new(),
            diet_plan_id: new_meal.diet_plan_id,
            name: new_meal.name,
            meal_type: new_meal.meal_type,
            description: new_meal.description,
            calories: new_meal.calories,
            protein_g: new_meal.protein_g,
            carbs_g: new_meal.carbs_g,
            fat_g: new_meal.fat_g,
            meal_time: new_meal.meal_time,
            items: new_meal.items,
        }
    }
}

/// Meal creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
    /// Parent plan
    pub diet_plan_id: DietPlanId,
    /// Display name
    pub name: String,
    /// Slot in the day
    pub meal_type: MealType,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Energy in kcal
    #[serde(default)]
    pub calories: Option<u32>,
    /// Protein in grams
    #[serde(default)]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(default)]
    pub fat_g: Option<f64>,
    /// Display time
    #[serde(default)]
    pub meal_time: Option<String>,
    /// Food items
    #[serde(default)]
    pub items: Vec<String>,
}

/// Diet plan together with its meals, as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlanWithMeals {
    /// The plan
    #[serde(flatten)]
    pub plan: DietPlan,
    /// Its meals in insertion order
    pub meals: Vec<Meal>,
}
