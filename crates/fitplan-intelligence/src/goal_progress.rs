// ABOUTME: Normalized goal completion percentage for increasing and decreasing goals
// ABOUTME: Progress is always derived from start/current/target and clamped to 0..=100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::Goal;
use serde::{Deserialize, Serialize};

/// Direction a goal value must move in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Target below start (e.g. weight loss)
    Decreasing,
    /// Target above start (e.g. muscle gain)
    Increasing,
    /// Target equals start
    None,
}

impl GoalDirection {
    /// Direction from start towards target
    #[must_use]
    pub fn between(start: f64, target: f64) -> Self {
        if target < start {
            Self::Decreasing
        } else if target > start {
            Self::Increasing
        } else {
            Self::None
        }
    }
}

/// Percent of the way from `start` to `target`, rounded and clamped to 0..=100
///
/// A goal whose target equals its start is complete (100). Overshooting the target
/// reports 100 and moving the wrong way reports 0.
#[must_use]
pub fn progress_percent(current: f64, target: f64, start: f64) -> u8 {
    if GoalDirection::between(start, target) == GoalDirection::None {
        return 100;
    }
    // Scaling start and target into -1..=1 keeps the span finite
    let scale = target.abs().max(start.abs());
    let (current, target, start) = (current / scale, target / scale, start / scale);
    let raw = match GoalDirection::between(start, target) {
        GoalDirection::None => return 100,
        GoalDirection::Decreasing => (start - current) / (start - target) * 100.0,
        GoalDirection::Increasing => (current - start) / (target - start) * 100.0,
    };

    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

/// Progress of a stored goal
#[must_use]
pub fn goal_progress(goal: &Goal) -> u8 {
    progress_percent(goal.current_value, goal.target_value, goal.start_value)
}
