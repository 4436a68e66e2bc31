// ABOUTME: Route module organization for the fitplan REST API
// ABOUTME: Assembles every domain router with tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the fitplan server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to [`crate::services`] or the store. Everything except the
//! liveness probe lives under `/api`.

/// Educational article routes
pub mod articles;
/// Standalone body composition calculators
pub mod calculators;
/// Demo account seeding route
pub mod demo;
/// Goal routes
pub mod goals;
/// Liveness probe
pub mod health;
/// Health metric check-in routes
pub mod health_metrics;
/// Diet plan and meal routes
pub mod nutrition;
/// Recommendation routes
pub mod recommendations;
/// User account routes
pub mod users;
/// Workout and exercise routes
pub mod workouts;

pub use articles::ArticleRoutes;
pub use calculators::CalculatorRoutes;
pub use demo::DemoRoutes;
pub use goals::GoalRoutes;
pub use health::HealthRoutes;
pub use health_metrics::HealthMetricRoutes;
pub use nutrition::NutritionRoutes;
pub use recommendations::RecommendationRoutes;
pub use users::UserRoutes;
pub use workouts::WorkoutRoutes;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(CalculatorRoutes::routes())
        .merge(UserRoutes::routes(Arc::clone(&resources)))
        .merge(HealthMetricRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(Arc::clone(&resources)))
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(ArticleRoutes::routes(Arc::clone(&resources)))
        .merge(GoalRoutes::routes(Arc::clone(&resources)))
        .merge(RecommendationRoutes::routes(Arc::clone(&resources)))
        .merge(DemoRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// JSON body extractor whose rejections use the standard error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the standard error envelope
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Parse a path segment into a typed id
pub(crate) fn parse_id<T>(raw: &str, entity: &str) -> AppResult<T>
where
    T: FromStr<Err = uuid::Error>,
{
    raw.parse().map_err(|e: uuid::Error| {
        debug!(entity, raw, "Rejected malformed id");
        AppError::invalid_input(format!("Invalid {entity} ID format: {e}"))
    })
}

/// Deserialize a JSON body, reporting shape errors as `InvalidInput`
pub(crate) fn parse_body<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body)
        .map_err(|e| AppError::invalid_input(format!("Invalid request body: {e}")))
}

/// Reject blank strings for required text fields
pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        Err(AppError::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        ))
    } else {
        Ok(())
    }
}
