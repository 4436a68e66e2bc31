// ABOUTME: Demo account seeder creating a user with a check-in, diet plan, workouts, and a goal
// ABOUTME: Used by POST /api/setup-demo and the --seed-demo startup flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo data
//!
//! Seeding is idempotent: when the demo username already exists the existing
//! account is returned and nothing else is written.

use crate::constants::demo;
use crate::errors::AppResult;
use crate::services::{goals, health_metrics, users};
use crate::storage::{DietPlanRepository, FitplanStore, UserRepository, WorkoutRepository};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use fitplan_core::models::{
    ActivityLevel, DietPlan, Exercise, FitnessGoal, Gender, Meal, MealType, NewDietPlan,
    NewExercise, NewGoal, NewHealthMetric, NewMeal, NewUser, NewWorkout, User, UserProfile,
    Workout, WorkoutId,
};
use serde::Serialize;
use tracing::info;

/// Outcome of a seeding request
#[derive(Debug, Clone, Serialize)]
pub struct DemoAccount {
    /// The demo user
    pub user: User,
    /// False when the account already existed
    pub created: bool,
}

/// Next Wednesday strictly after `today`
fn next_wednesday(today: NaiveDate) -> NaiveDate {
    let from_monday = today.weekday().num_days_from_monday();
    let wednesday = Weekday::Wed.num_days_from_monday();
    let ahead = match (wednesday + 7 - from_monday) % 7 {
        0 => 7,
        days => days,
    };
    today + Days::new(u64::from(ahead))
}

async fn add_workout(
    store: &dyn FitplanStore,
    workout: NewWorkout,
    exercises: &[(&str, u32, u32)],
) -> AppResult<WorkoutId> {
    let workout = store.create_workout(Workout::from_new(workout)).await?;
    for &(name, sets, reps) in exercises {
        store
            .create_exercise(Exercise::from_new(NewExercise {
                workout_id: workout.id,
                name: name.to_owned(),
                sets: Some(sets),
                reps: Some(reps),
                duration_secs: None,
                notes: None,
            }))
            .await?;
    }
    Ok(workout.id)
}

/// Create the demo account and its sample data
///
/// # Errors
///
/// Returns an error if any record fails to store
pub async fn seed_demo_user(store: &dyn FitplanStore, today: NaiveDate) -> AppResult<DemoAccount> {
    if let Some(user) = store.get_user_by_username(demo::USERNAME).await? {
        info!(user_id = %user.id, "Demo account already present");
        return Ok(DemoAccount {
            user,
            created: false,
        });
    }

    let user = users::create_user(
        store,
        NewUser {
            username: demo::USERNAME.to_owned(),
            first_name: demo::FIRST_NAME.to_owned(),
            last_name: None,
            email: demo::EMAIL.to_owned(),
            profile: Some(UserProfile {
                age: demo::AGE,
                gender: Gender::Male,
                height_cm: demo::HEIGHT_CM,
                activity_level: ActivityLevel::Moderate,
                goal: FitnessGoal::Maintenance,
            }),
        },
    )
    .await?;

    health_metrics::record_check_in(
        store,
        NewHealthMetric {
            user_id: user.id,
            date: Some(today),
            weight_kg: demo::WEIGHT_KG,
            height_cm: Some(demo::HEIGHT_CM),
            body_fat_percent: None,
            water_intake_l: None,
            calories_consumed: Some(demo::DAILY_CALORIES),
            calories_burned: None,
            steps: None,
            notes: None,
        },
        today,
    )
    .await?;

    let plan = store
        .create_diet_plan(DietPlan::from_new(NewDietPlan {
            user_id: user.id,
            name: "Weight Maintenance Plan".to_owned(),
            description: Some("Balanced nutrition for maintaining healthy weight".to_owned()),
            total_calories: Some(demo::DAILY_CALORIES),
        }))
        .await?;

    let meals = [
        (
            MealType::Breakfast,
            "Breakfast",
            "Greek yogurt with berries and granola",
            380,
            "8:00 AM",
        ),
        (
            MealType::Lunch,
            "Lunch",
            "Grilled chicken salad with olive oil dressing",
            450,
            "12:30 PM",
        ),
        (
            MealType::Dinner,
            "Dinner",
            "Baked salmon with quinoa and steamed vegetables",
            520,
            "7:00 PM",
        ),
    ];
    for (meal_type, name, description, calories, meal_time) in meals {
        store
            .create_meal(Meal::from_new(NewMeal {
                diet_plan_id: plan.id,
                name: name.to_owned(),
                meal_type,
                description: Some(description.to_owned()),
                calories: Some(calories),
                protein_g: None,
                carbs_g: None,
                fat_g: None,
                meal_time: Some(meal_time.to_owned()),
                items: Vec::new(),
            }))
            .await?;
    }

    add_workout(
        store,
        NewWorkout {
            user_id: user.id,
            name: "Full Body Strength".to_owned(),
            description: Some(
                "Complete body workout focusing on all major muscle groups".to_owned(),
            ),
            duration_minutes: Some(30),
            calories_burned: None,
            scheduled_date: Some(today),
            scheduled_time: Some("5:00 PM".to_owned()),
        },
        &[("Squats", 3, 12), ("Push-ups", 3, 10), ("Lunges", 3, 10)],
    )
    .await?;

    add_workout(
        store,
        NewWorkout {
            user_id: user.id,
            name: "HIIT Cardio".to_owned(),
            description: Some(
                "High intensity interval training for maximum calorie burn".to_owned(),
            ),
            duration_minutes: Some(20),
            calories_burned: None,
            scheduled_date: Some(today + Days::new(1)),
            scheduled_time: Some("7:00 AM".to_owned()),
        },
        &[("Jumping Jacks", 4, 30), ("Burpees", 4, 15)],
    )
    .await?;

    add_workout(
        store,
        NewWorkout {
            user_id: user.id,
            name: "Yoga & Stretching".to_owned(),
            description: Some(
                "Gentle yoga and stretching for recovery and flexibility".to_owned(),
            ),
            duration_minutes: Some(45),
            calories_burned: None,
            scheduled_date: Some(next_wednesday(today)),
            scheduled_time: Some("6:30 PM".to_owned()),
        },
        &[("Sun Salutations", 3, 5), ("Warrior Poses", 2, 8)],
    )
    .await?;

    goals::create_goal(
        store,
        NewGoal {
            user_id: user.id,
            name: "Lose Weight".to_owned(),
            target_value: demo::GOAL_TARGET_KG,
            current_value: demo::WEIGHT_KG,
            start_value: Some(demo::GOAL_START_KG),
            start_date: Some(today),
            target_date: today.checked_add_months(Months::new(demo::GOAL_HORIZON_MONTHS)),
            completed: false,
        },
        today,
    )
    .await?;

    info!(user_id = %user.id, "Demo account seeded");
    Ok(DemoAccount {
        user,
        created: true,
    })
}
