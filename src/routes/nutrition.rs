// ABOUTME: Route handlers for diet plans and their meals
// ABOUTME: Plan creation, per-user plan listing, current plan with meals, and meal management
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiJson, parse_body, parse_id, require_text};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::users::require_user;
use crate::storage::DietPlanRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use fitplan_core::models::{DietPlan, DietPlanId, Meal, NewDietPlan, NewMeal, UserId};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Diet plan and meal routes implementation
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/diet-plans", post(Self::handle_create_plan))
            .route("/api/users/:id/diet-plans", get(Self::handle_list_plans))
            .route(
                "/api/users/:id/diet-plans/current",
                get(Self::handle_current_plan),
            )
            .route("/api/meals", post(Self::handle_create_meal))
            .route("/api/diet-plans/:id/meals", get(Self::handle_list_meals))
            .with_state(resources)
    }

    /// Handle POST /api/diet-plans
    async fn handle_create_plan(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let new_plan: NewDietPlan = parse_body(body)?;
        require_text("name", &new_plan.name)?;

        let plan = resources
            .store
            .create_diet_plan(DietPlan::from_new(new_plan))
            .await?;
        info!(user_id = %plan.user_id, plan_id = %plan.id, "Diet plan created");
        Ok((StatusCode::CREATED, Json(plan)).into_response())
    }

    /// Handle GET /api/users/:id/diet-plans
    async fn handle_list_plans(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        require_user(resources.store(), user_id).await?;

        let plans = resources.store.diet_plans_for_user(user_id).await?;
        Ok((StatusCode::OK, Json(plans)).into_response())
    }

    /// Handle GET /api/users/:id/diet-plans/current
    async fn handle_current_plan(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id: UserId = parse_id(&user_id, "user")?;
        require_user(resources.store(), user_id).await?;

        let plan = resources
            .store
            .current_diet_plan(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Diet plan for user {user_id}")))?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    /// Handle POST /api/meals
    async fn handle_create_meal(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let new_meal: NewMeal = parse_body(body)?;
        require_text("name", &new_meal.name)?;

        let meal = resources.store.create_meal(Meal::from_new(new_meal)).await?;
        Ok((StatusCode::CREATED, Json(meal)).into_response())
    }

    /// Handle GET /api/diet-plans/:id/meals
    async fn handle_list_meals(
        State(resources): State<Arc<ServerResources>>,
        Path(plan_id): Path<String>,
    ) -> Result<Response, AppError> {
        let plan_id: DietPlanId = parse_id(&plan_id, "diet plan")?;
        let meals = resources.store.meals_for_plan(plan_id).await?;
        Ok((StatusCode::OK, Json(meals)).into_response())
    }
}
