// ABOUTME: Health metric check-in records with derived BMI
// ABOUTME: Metrics are immutable once recorded; new check-ins create new records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BodyWeight, Height, MetricId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One health check-in
///
/// `bmi` is derived from `weight_kg` and `height_cm` when the record is created
/// and the record is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    /// Unique metric identifier
    pub id: MetricId,
    /// Owner
    pub user_id: UserId,
    /// Day the measurement applies to
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height used for the BMI, in centimeters
    pub height_cm: f64,
    /// Body mass index, one decimal
    pub bmi: f64,
    /// Body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Water intake in liters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_intake_l: Option<f64>,
    /// Calories consumed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_consumed: Option<u32>,
    /// Calories burned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    /// Step count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Insertion timestamp
    pub created_at: DateTime<Utc>,
}

impl HealthMetric {
    /// Build a record from a validated check-in and its computed BMI
    #[must_use]
    pub fn record(
        check_in: NewHealthMetric,
        weight: BodyWeight,
        height: Height,
        bmi: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: MetricId::new(),
            user_id: check_in.user_id,
            date,
            weight_kg: weight.kg(),
            height_cm: height.cm(),
            bmi,
            body_fat_percent: check_in.body_fat_percent,
            water_intake_l: check_in.water_intake_l,
            calories_consumed: check_in.calories_consumed,
            calories_burned: check_in.calories_burned,
            steps: check_in.steps,
            notes: check_in.notes,
            created_at: Utc::now(),
        }
    }
}

/// Check-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHealthMetric {
    /// Owner
    pub user_id: UserId,
    /// Day of the measurement, defaults to today
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters; falls back to the profile height when absent
    #[serde(default)]
    pub height_cm: Option<f64>,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    /// Water intake in liters
    #[serde(default)]
    pub water_intake_l: Option<f64>,
    /// Calories consumed
    #[serde(default)]
    pub calories_consumed: Option<u32>,
    /// Calories burned
    #[serde(default)]
    pub calories_burned: Option<u32>,
    /// Step count
    #[serde(default)]
    pub steps: Option<u32>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}
