// ABOUTME: Route handler creating the demo account
// ABOUTME: Returns 201 on first call and 200 with the existing account afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::seed::seed_demo_user;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use fitplan_core::models::User;
use serde::Serialize;
use std::sync::Arc;

/// Response for POST /api/setup-demo
#[derive(Debug, Serialize)]
pub struct SetupDemoResponse {
    /// The demo user
    pub user: User,
    /// Whether this call created the account
    pub created: bool,
    /// Human-readable outcome
    pub message: String,
}

/// Demo routes implementation
pub struct DemoRoutes;

impl DemoRoutes {
    /// Create the demo seeding route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/setup-demo", post(Self::handle_setup_demo))
            .with_state(resources)
    }

    /// Handle POST /api/setup-demo
    async fn handle_setup_demo(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let account = seed_demo_user(resources.store(), resources.today()).await?;
        let (status, message) = if account.created {
            (StatusCode::CREATED, "Demo account created successfully")
        } else {
            (StatusCode::OK, "Demo account already exists")
        };

        let response = SetupDemoResponse {
            user: account.user,
            created: account.created,
            message: message.to_owned(),
        };
        Ok((status, Json(response)).into_response())
    }
}
