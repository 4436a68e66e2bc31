// ABOUTME: Route handler serving diet and workout recommendations
// ABOUTME: Maps a missing profile or check-in to 404 so the client can prompt for input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::parse_id;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::recommendations;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fitplan_core::models::UserId;
use std::sync::Arc;

/// Recommendation routes implementation
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the recommendation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:id/recommendations",
                get(Self::handle_recommendations),
            )
            .with_state(resources)
    }

    /// Handle GET /api/users/:id/recommendations
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        let result = recommendations::recommend_for_user(
            resources.store(),
            &resources.recommendation_engine,
            user_id,
        )
        .await?;
        Ok((StatusCode::OK, Json(result)).into_response())
    }
}
