// ABOUTME: Core data models for the fitplan platform
// ABOUTME: Re-exports ids, profiles, measurements, metrics, goals, workouts, nutrition, and articles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records are created from `New*` payloads and identified by UUID newtypes.
//! Derived values (BMI, goal progress) are computed by `fitplan-intelligence`
//! and never accepted from callers.

mod article;
mod goal;
mod health;
mod ids;
mod measurements;
mod nutrition;
mod profile;
mod user;
mod workout;

pub use article::{Article, NewArticle};
pub use goal::{Goal, NewGoal};
pub use health::{HealthMetric, NewHealthMetric};
pub use ids::{ArticleId, DietPlanId, ExerciseId, GoalId, MealId, MetricId, UserId, WorkoutId};
pub use measurements::{BodyWeight, Height, HEIGHT_CM_RANGE, WEIGHT_KG_RANGE};
pub use nutrition::{DietPlan, DietPlanWithMeals, Meal, MealType, NewDietPlan, NewMeal};
pub use profile::{ActivityLevel, FitnessGoal, Gender, UserProfile};
pub use user::{NewUser, User};
pub use workout::{Exercise, NewExercise, NewWorkout, Workout, WorkoutWithExercises};
