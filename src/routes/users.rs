// ABOUTME: Route handlers for user accounts and calculator profiles
// ABOUTME: Sign-up, lookup, and profile replacement under /api/users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiJson, parse_body, parse_id};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::users;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use fitplan_core::models::{NewUser, UserId, UserProfile};
use serde_json::Value;
use std::sync::Arc;

/// User routes implementation
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", post(Self::handle_create))
            .route("/api/users/:id", get(Self::handle_get))
            .route("/api/users/:id/profile", put(Self::handle_update_profile))
            .with_state(resources)
    }

    /// Handle POST /api/users
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let new_user: NewUser = parse_body(body)?;
        let user = users::create_user(resources.store(), new_user).await?;
        Ok((StatusCode::CREATED, Json(user)).into_response())
    }

    /// Handle GET /api/users/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        let user = users::require_user(resources.store(), user_id).await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }

    /// Handle PUT /api/users/:id/profile
    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        let profile: UserProfile = parse_body(body)?;
        let user = users::update_profile(resources.store(), user_id, profile).await?;
        Ok((StatusCode::OK, Json(user)).into_response())
    }
}
