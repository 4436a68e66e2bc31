// ABOUTME: Route handlers for standalone body composition calculators
// ABOUTME: Serves the U.S. Navy circumference body fat estimate without storing anything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{parse_body, ApiJson};
use crate::errors::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use fitplan_core::models::Gender;
use fitplan_intelligence::body_fat_navy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Circumference measurements for the Navy body fat formula
#[derive(Debug, Clone, Deserialize)]
pub struct BodyFatRequest {
    /// Waist circumference at the navel
    pub waist_cm: f64,
    /// Neck circumference below the larynx
    pub neck_cm: f64,
    /// Standing height
    pub height_cm: f64,
    /// Selects the male or female formula
    pub gender: Gender,
    /// Hip circumference, required for the female formula
    #[serde(default)]
    pub hip_cm: Option<f64>,
}

/// Body fat estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatResponse {
    /// Estimated body fat, one decimal
    pub body_fat_percent: f64,
}

/// Calculator routes implementation
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create all calculator routes
    pub fn routes() -> Router {
        Router::new().route("/api/calculators/body-fat", post(Self::handle_body_fat))
    }

    /// Handle POST /api/calculators/body-fat
    async fn handle_body_fat(ApiJson(body): ApiJson<Value>) -> Result<Response, AppError> {
        let request: BodyFatRequest = parse_body(body)?;
        let body_fat_percent = body_fat_navy(
            request.waist_cm,
            request.neck_cm,
            request.height_cm,
            request.gender,
            request.hip_cm,
        )?;

        debug!(gender = %request.gender, body_fat_percent, "Estimated body fat");
        Ok((StatusCode::OK, Json(BodyFatResponse { body_fat_percent })).into_response())
    }
}
