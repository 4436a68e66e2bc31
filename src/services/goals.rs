// ABOUTME: Goal service: creation, progress updates, one-way completion
// ABOUTME: Responses embed a progress percentage computed on read, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::users::require_user;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::storage::{FitplanStore, GoalRepository};
use chrono::NaiveDate;
use fitplan_core::models::{Goal, GoalId, NewGoal, UserId};
use fitplan_intelligence::goal_progress;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Goal as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalView {
    /// Stored goal
    #[serde(flatten)]
    pub goal: Goal,
    /// Completion percentage in 0..=100
    pub progress_percent: u8,
}

impl From<Goal> for GoalView {
    fn from(goal: Goal) -> Self {
        let progress_percent = goal_progress(&goal);
        Self {
            goal,
            progress_percent,
        }
    }
}

fn ensure_finite(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{field} must be a finite number"
        )))
    }
}

/// Create a goal
///
/// # Errors
///
/// Returns `MissingRequiredField` for a blank name, `InvalidInput` for non-finite
/// values, and `ResourceNotFound` for an unknown user
pub async fn create_goal(
    store: &dyn FitplanStore,
    new_goal: NewGoal,
    today: NaiveDate,
) -> AppResult<GoalView> {
    if new_goal.name.trim().is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            "Goal name is required",
        ));
    }
    ensure_finite("target_value", new_goal.target_value)?;
    ensure_finite("current_value", new_goal.current_value)?;
    if let Some(start) = new_goal.start_value {
        ensure_finite("start_value", start)?;
    }

    let goal = store.create_goal(Goal::from_new(new_goal, today)).await?;
    info!(user_id = %goal.user_id, goal_id = %goal.id, name = %goal.name, "Goal created");
    Ok(goal.into())
}

/// Goals of a user, earliest deadline first
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown user
pub async fn goals_for_user(store: &dyn FitplanStore, user_id: UserId) -> AppResult<Vec<GoalView>> {
    require_user(store, user_id).await?;
    let goals = store.goals_for_user(user_id).await?;
    Ok(goals.into_iter().map(GoalView::from).collect())
}

/// Record a new current value for a goal
///
/// # Errors
///
/// Returns `InvalidInput` for a non-finite value and `ResourceNotFound` for an unknown goal
pub async fn update_progress(
    store: &dyn FitplanStore,
    goal_id: GoalId,
    current_value: f64,
) -> AppResult<GoalView> {
    ensure_finite("current_value", current_value)?;
    let goal = store.update_goal_progress(goal_id, current_value).await?;
    let view = GoalView::from(goal);
    info!(goal_id = %goal_id, current_value, progress = view.progress_percent, "Goal progress updated");
    Ok(view)
}

/// Mark a goal complete; completing an already completed goal succeeds unchanged
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown goal
pub async fn complete_goal(store: &dyn FitplanStore, goal_id: GoalId) -> AppResult<GoalView> {
    let goal = store.complete_goal(goal_id).await?;
    info!(goal_id = %goal_id, "Goal completed");
    Ok(goal.into())
}
