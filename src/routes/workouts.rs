// ABOUTME: Route handlers for workouts and exercises
// ABOUTME: Scheduling, per-user listing, today's workout, upcoming workouts, and exercise management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiJson, ApiQuery, parse_body, parse_id, require_text};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::users::require_user;
use crate::storage::WorkoutRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fitplan_core::models::{Exercise, NewExercise, NewWorkout, UserId, Workout, WorkoutId};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Query parameters for upcoming workouts
#[derive(Debug, Deserialize, Default)]
pub struct UpcomingQuery {
    /// Maximum number of workouts; defaults to `UPCOMING_WORKOUTS_LIMIT`
    pub limit: Option<usize>,
}

/// Workout routes implementation
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", post(Self::handle_create_workout))
            .route("/api/users/:id/workouts", get(Self::handle_list_workouts))
            .route(
                "/api/users/:id/workouts/current",
                get(Self::handle_current_workout),
            )
            .route(
                "/api/users/:id/workouts/upcoming",
                get(Self::handle_upcoming_workouts),
            )
            .route("/api/exercises", post(Self::handle_create_exercise))
            .route(
                "/api/workouts/:id/exercises",
                get(Self::handle_list_exercises),
            )
            .with_state(resources)
    }

    /// Handle POST /api/workouts
    async fn handle_create_workout(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let new_workout: NewWorkout = parse_body(body)?;
        require_text("name", &new_workout.name)?;

        let workout = resources
            .store
            .create_workout(Workout::from_new(new_workout))
            .await?;
        info!(
            user_id = %workout.user_id,
            workout_id = %workout.id,
            scheduled = ?workout.scheduled_date,
            "Workout created"
        );
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Handle GET /api/users/:id/workouts
    async fn handle_list_workouts(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        require_user(resources.store(), user_id).await?;

        let workouts = resources.store.workouts_for_user(user_id).await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle GET /api/users/:id/workouts/current
    async fn handle_current_workout(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        require_user(resources.store(), user_id).await?;

        let workout = resources
            .store
            .current_workout(user_id, resources.today())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout for user {user_id}")))?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle GET /api/users/:id/workouts/upcoming
    async fn handle_upcoming_workouts(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        ApiQuery(query): ApiQuery<UpcomingQuery>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        require_user(resources.store(), user_id).await?;

        let limit = query
            .limit
            .unwrap_or(resources.config.upcoming_workouts_limit);
        let workouts = resources
            .store
            .upcoming_workouts(user_id, resources.today(), limit)
            .await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle POST /api/exercises
    async fn handle_create_exercise(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let new_exercise: NewExercise = parse_body(body)?;
        require_text("name", &new_exercise.name)?;

        let exercise = resources
            .store
            .create_exercise(Exercise::from_new(new_exercise))
            .await?;
        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    /// Handle GET /api/workouts/:id/exercises
    async fn handle_list_exercises(
        State(resources): State<Arc<ServerResources>>,
        Path(workout_id): Path<String>,
    ) -> Result<Response, AppError> {
        let workout_id: WorkoutId = parse_id(&workout_id, "workout")?;
        let exercises = resources.store.exercises_for_workout(workout_id).await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }
}
