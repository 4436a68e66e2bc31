// ABOUTME: Route handlers for user goals
// ABOUTME: Creation, listing with computed progress, progress updates, and completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiJson, parse_body, parse_id};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::goals;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use fitplan_core::models::{GoalId, NewGoal, UserId};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Body of a progress update
#[derive(Debug, Deserialize)]
pub struct ProgressUpdate {
    /// Newly measured value
    pub current_value: f64,
}

/// Goal routes implementation
pub struct GoalRoutes;

impl GoalRoutes {
    /// Create all goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/goals", post(Self::handle_create))
            .route("/api/users/:id/goals", get(Self::handle_list))
            .route("/api/goals/:id/progress", patch(Self::handle_progress))
            .route("/api/goals/:id/complete", patch(Self::handle_complete))
            .with_state(resources)
    }

    /// Handle POST /api/goals
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let new_goal: NewGoal = parse_body(body)?;
        let goal = goals::create_goal(resources.store(), new_goal, resources.today()).await?;
        Ok((StatusCode::CREATED, Json(goal)).into_response())
    }

    /// Handle GET /api/users/:id/goals
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        let views = goals::goals_for_user(resources.store(), user_id).await?;
        Ok((StatusCode::OK, Json(views)).into_response())
    }

    /// Handle PATCH /api/goals/:id/progress
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(goal_id): Path<String>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let goal_id: GoalId = parse_id(&goal_id, "goal")?;
        let update: ProgressUpdate = parse_body(body)?;
        let view = goals::update_progress(resources.store(), goal_id, update.current_value).await?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    /// Handle PATCH /api/goals/:id/complete
    async fn handle_complete(
        State(resources): State<Arc<ServerResources>>,
        Path(goal_id): Path<String>,
    ) -> Result<Response, AppError> {
        let goal_id: GoalId = parse_id(&goal_id, "goal")?;
        let view = goals::complete_goal(resources.store(), goal_id).await?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }
}
