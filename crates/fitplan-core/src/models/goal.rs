// ABOUTME: Goal model with start/current/target values and one-way completion
// ABOUTME: Progress percentage is computed on read, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{GoalId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A tracked goal such as "reach 65 kg"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique goal identifier
    pub id: GoalId,
    /// Owner
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Value when the goal was set
    pub start_value: f64,
    /// Latest recorded value
    pub current_value: f64,
    /// Value to reach
    pub target_value: f64,
    /// Day the goal was set
    pub start_date: NaiveDate,
    /// Deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Completion flag; only ever goes from false to true
    pub completed: bool,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Build a goal from a creation payload
    #[must_use]
    pub fn from_new(new_goal: NewGoal, today: NaiveDate) -> Self {
        Self {
            id: GoalId::new(),
            user_id: new_goal.user_id,
            name: new_goal.name,
            start_value: new_goal.start_value.unwrap_or(new_goal.current_value),
            current_value: new_goal.current_value,
            target_value: new_goal.target_value,
            start_date: new_goal.start_date.unwrap_or(today),
            target_date: new_goal.target_date,
            completed: new_goal.completed,
            created_at: Utc::now(),
        }
    }

    /// Record a new current value; completion is left untouched
    pub fn record_progress(&mut self, current_value: f64) {
        self.current_value = current_value;
    }

    /// Mark the goal complete; calling it again is a no-op
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

/// Goal creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    /// Owner
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Value to reach
    pub target_value: f64,
    /// Latest recorded value
    pub current_value: f64,
    /// Starting value; defaults to `current_value`
    #[serde(default)]
    pub start_value: Option<f64>,
    /// Day the goal was set; defaults to today
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Deadline
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Whether the goal starts out completed
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_goal() -> NewGoal {
        NewGoal {
            user_id: UserId::new(),
            name: "Lose Weight".to_owned(),
            target_value: 65.0,
            current_value: 68.0,
            start_value: None,
            start_date: None,
            target_date: None,
            completed: false,
        }
    }

    #[test]
    fn test_start_value_defaults_to_current() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let goal = Goal::from_new(new_goal(), today);
        assert!((goal.start_value - 68.0).abs() < f64::EPSILON);
        assert_eq!(goal.start_date, today);
    }

    #[test]
    fn test_completion_is_one_way() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut goal = Goal::from_new(new_goal(), today);
        goal.mark_completed();
        goal.record_progress(66.0);
        goal.mark_completed();
        assert!(goal.completed);
        assert!((goal.current_value - 66.0).abs() < f64::EPSILON);
    }
}
