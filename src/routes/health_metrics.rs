// ABOUTME: Route handlers for health metric check-ins
// ABOUTME: Records check-ins and serves a user's history and latest record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiJson, parse_body, parse_id};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::health_metrics;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fitplan_core::models::{NewHealthMetric, UserId};
use serde_json::Value;
use std::sync::Arc;

/// Health metric routes implementation
pub struct HealthMetricRoutes;

impl HealthMetricRoutes {
    /// Create all health metric routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/health-metrics", post(Self::handle_create))
            .route("/api/users/:id/health-metrics", get(Self::handle_history))
            .route(
                "/api/users/:id/health-metrics/latest",
                get(Self::handle_latest),
            )
            .with_state(resources)
    }

    /// Handle POST /api/health-metrics
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let check_in: NewHealthMetric = parse_body(body)?;
        let metric =
            health_metrics::record_check_in(resources.store(), check_in, resources.today()).await?;
        Ok((StatusCode::CREATED, Json(metric)).into_response())
    }

    /// Handle GET /api/users/:id/health-metrics
    async fn handle_history(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        let metrics = health_metrics::history(resources.store(), user_id).await?;
        Ok((StatusCode::OK, Json(metrics)).into_response())
    }

    /// Handle GET /api/users/:id/health-metrics/latest
    async fn handle_latest(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        let metric = health_metrics::latest(resources.store(), user_id).await?;
        Ok((StatusCode::OK, Json(metric)).into_response())
    }
}
