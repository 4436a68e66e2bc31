// ABOUTME: Recommendation service joining the latest check-in with the user's profile
// ABOUTME: Missing profile or check-in surfaces as ResourceNotFound so clients can prompt for input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::users::require_user;
use crate::errors::{AppError, AppResult};
use crate::storage::{FitplanStore, HealthMetricRepository};
use fitplan_core::models::UserId;
use fitplan_intelligence::{RecommendationEngine, RecommendationResult};
use tracing::{debug, info};

/// Generate diet and workout recommendations for a user
///
/// The result is derived fresh on every call. A check-in recorded concurrently
/// may or may not be seen.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the user, their profile, or any check-in is missing,
/// and propagates calculator errors for out-of-range inputs
pub async fn recommend_for_user(
    store: &dyn FitplanStore,
    engine: &RecommendationEngine,
    user_id: UserId,
) -> AppResult<RecommendationResult> {
    let user = require_user(store, user_id).await?;
    let profile = user
        .profile
        .ok_or_else(|| AppError::not_found(format!("Profile for user {user_id}")))?;
    let metric = store
        .latest_health_metric(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Health metrics for user {user_id}")))?;

    debug!(user_id = %user_id, metric_id = %metric.id, date = %metric.date, "Using latest check-in");
    let result = engine.recommend(&metric, &profile)?;

    info!(
        user_id = %user_id,
        bmi = result.bmi,
        diet_type = result.diet_type.as_str(),
        daily_calories = result.daily_calories,
        "Recommendations generated"
    );
    Ok(result)
}
