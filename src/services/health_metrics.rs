// ABOUTME: Health metric service: turns a check-in payload into an immutable record
// ABOUTME: Derives BMI from weight and height, falling back to the profile height
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::users::require_user;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::storage::{FitplanStore, HealthMetricRepository};
use chrono::NaiveDate;
use fitplan_core::models::{BodyWeight, HealthMetric, Height, NewHealthMetric, UserId};
use fitplan_intelligence::bmi;
use tracing::info;

/// Record a check-in
///
/// Business rules:
/// - Weight must be positive
/// - Height comes from the payload, else from the user's profile
/// - BMI is always computed here, never taken from the caller
/// - `date` defaults to `today`
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown user, `MissingRequiredField` when no height
/// is available, and `InvalidInput` for non-positive measurements
pub async fn record_check_in(
    store: &dyn FitplanStore,
    check_in: NewHealthMetric,
    today: NaiveDate,
) -> AppResult<HealthMetric> {
    let user = require_user(store, check_in.user_id).await?;

    let weight = BodyWeight::from_kg(check_in.weight_kg)?;
    let height_cm = check_in
        .height_cm
        .or_else(|| user.profile.as_ref().map(|p| p.height_cm))
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::MissingRequiredField,
                "Height is required when the user has no profile height",
            )
        })?;
    let height = Height::from_cm(height_cm)?;

    let bmi = bmi(weight, height);
    let date = check_in.date.unwrap_or(today);
    let metric = store
        .create_health_metric(HealthMetric::record(check_in, weight, height, bmi, date))
        .await?;

    info!(user_id = %metric.user_id, metric_id = %metric.id, bmi, %date, "Health metric recorded");
    Ok(metric)
}

/// Check-in history of a user, newest first
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown user
pub async fn history(store: &dyn FitplanStore, user_id: UserId) -> AppResult<Vec<HealthMetric>> {
    require_user(store, user_id).await?;
    Ok(store.health_metrics_for_user(user_id).await?)
}

/// Most recent check-in of a user
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown user or a user without check-ins
pub async fn latest(store: &dyn FitplanStore, user_id: UserId) -> AppResult<HealthMetric> {
    require_user(store, user_id).await?;
    store
        .latest_health_metric(user_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Health metrics for user {user_id}")))
}
