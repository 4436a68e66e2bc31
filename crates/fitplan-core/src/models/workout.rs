// ABOUTME: Workout sessions and their exercises
// ABOUTME: Workouts may be scheduled for a date; exercises belong to one workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ExerciseId, UserId, WorkoutId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout identifier
    pub id: WorkoutId,
    /// Owner
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Planned duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Estimated calories burned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    /// Day the workout is scheduled for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    /// Display time such as "5:00 PM"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// Build a workout from a creation payload
    #[must_use]
    pub fn from_new(new_workout: NewWorkout) -> Self {
        Self {
            id: WorkoutId::new(),
            user_id: new_workout.user_id,
            name: new_workout.name,
            description: new_workout.description,
            duration_minutes: new_workout.duration_minutes,
            calories_burned: new_workout.calories_burned,
            scheduled_date: new_workout.scheduled_date,
            scheduled_time: new_workout.scheduled_time,
            created_at: Utc::now(),
        }
    }
}

/// Workout creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
    /// Owner
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Planned duration in minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Estimated calories burned
    #[serde(default)]
    pub calories_burned: Option<u32>,
    /// Day the workout is scheduled for
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    /// Display time
    #[serde(default)]
    pub scheduled_time: Option<String>,
}

/// One exercise inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise identifier
    pub id: ExerciseId,
    /// Parent workout
    pub workout_id: WorkoutId,
    /// Exercise name
    pub name: String,
    /// Number of sets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Hold or work duration in seconds (planks, intervals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    /// Notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Exercise {
    /// Build an exercise from a creation payload
    #[must_use]
    pub fn from_new(new_exercise: NewExercise) -> Self {
        Self {
            id: ExerciseId::new(),
            workout_id: new_exercise.workout_id,
            name: new_exercise.name,
            sets: new_exercise.sets,
            reps: new_exercise.reps,
            duration_secs: new_exercise.duration_secs,
            notes: new_exercise.notes,
        }
    }
}

/// Exercise creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExercise {
    /// Parent workout
    pub workout_id: WorkoutId,
    /// Exercise name
    pub name: String,
    /// Number of sets
    #[serde(default)]
    pub sets: Option<u32>,
    /// Repetitions per set
    #[serde(default)]
    pub reps: Option<u32>,
    /// Duration in seconds
    #[serde(default)]
    pub duration_secs: Option<u32>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Workout together with its exercises, as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutWithExercises {
    /// The workout
    #[serde(flatten)]
    pub workout: Workout,
    /// Its exercises in insertion order
    pub exercises: Vec<Exercise>,
}
