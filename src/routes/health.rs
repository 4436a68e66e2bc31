// ABOUTME: Liveness probe for load balancers and container orchestration
// ABOUTME: Reports service name, version, and a timestamp without touching the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::service_names;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        async fn health_handler() -> Json<Value> {
            Json(json!({
                "status": "healthy",
                "service": service_names::FITPLAN_SERVER,
                "version": service_names::SERVER_VERSION,
                "timestamp": Utc::now().to_rfc3339()
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
