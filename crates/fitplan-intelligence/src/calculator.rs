// ABOUTME: Body composition and energy expenditure calculations
// ABOUTME: BMI, BMI category, Mifflin-St Jeor BMR, TDEE, Navy body fat, ideal weight, hydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health Calculator Module
//!
//! Pure functions converting body measurements into derived physiological numbers.
//! Every input is validated before use; there is no silent fallback for bad values.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Hodgdon, J.A., & Beckett, M.B. (1984). Prediction of percent body fat for U.S. Navy men
//!   and women from body circumferences and height. Naval Health Research Center, Report 84-11.
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use crate::config::{
    ActivityFactorsConfig, BmiThresholdsConfig, BmrConfig, IdealWeightConfig, NutritionConfig,
    WaterIntakeConfig,
};
use fitplan_core::errors::AppError;
use fitplan_core::models::{ActivityLevel, BodyWeight, Gender, Height, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

// Hodgdon & Beckett metric coefficients
const NAVY_NUMERATOR: f64 = 495.0;
const NAVY_OFFSET: f64 = 450.0;
const NAVY_MALE_BASE: f64 = 1.0324;
const NAVY_MALE_GIRTH_COEF: f64 = 0.19077;
const NAVY_MALE_HEIGHT_COEF: f64 = 0.15456;
const NAVY_FEMALE_BASE: f64 = 1.29579;
const NAVY_FEMALE_GIRTH_COEF: f64 = 0.35004;
const NAVY_FEMALE_HEIGHT_COEF: f64 = 0.22100;

/// Round to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// WHO BMI category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Healthy",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body Mass Index from validated measurements
///
/// Formula: BMI = `weight_kg` / `height_m`², rounded to one decimal
#[must_use]
pub fn bmi(weight: BodyWeight, height: Height) -> f64 {
    let meters = height.meters();
    round_to_tenth(weight.kg() / (meters * meters))
}

/// Body Mass Index from raw numbers
///
/// # Errors
///
/// Returns `InvalidInput` when weight or height is not a finite positive number
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64, AppError> {
    let weight = BodyWeight::from_kg(weight_kg)?;
    let height = Height::from_meters(height_m)?;
    Ok(bmi(weight, height))
}

/// Classify a BMI value; each band includes its lower bound
#[must_use]
pub fn classify_bmi(bmi: f64, thresholds: &BmiThresholdsConfig) -> BmiCategory {
    if bmi < thresholds.underweight_below {
        BmiCategory::Underweight
    } else if bmi < thresholds.overweight_from {
        BmiCategory::Normal
    } else if bmi < thresholds.obese_from {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The result is returned unrounded.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidInput` for a non-positive weight or height or an age outside 1..=120
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> Result<f64, AppError> {
    BodyWeight::from_kg(weight_kg)?;
    Height::from_cm(height_cm)?;
    if !(1..=120).contains(&age) {
        return Err(AppError::invalid_input(
            "Age must be between 1 and 120 years",
        ));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    Ok(weight_component + height_component + age_component + config.constant_for(gender))
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// # Errors
///
/// Returns `InvalidInput` if BMR is not a finite positive number
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<f64, AppError> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }
    Ok(bmr * config.factor_for(activity_level))
}

/// Quick daily calorie estimate for a profile at a given weight: `round(BMR x activity factor)`
///
/// Unlike the planner target this applies no goal adjustment and no step rounding.
///
/// # Errors
///
/// Returns `InvalidInput` if the profile or weight fails BMR validation
pub fn daily_calories_estimate(
    profile: &UserProfile,
    weight: BodyWeight,
    config: &NutritionConfig,
) -> Result<u32, AppError> {
    let bmr = calculate_bmr(
        weight.kg(),
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;
    Ok(tdee.round() as u32)
}

/// Body fat percentage via the U.S. Navy circumference method
///
/// Men: 495 / (1.0324 - 0.19077·log10(waist - neck) + 0.15456·log10(height)) - 450
///
/// Women: 495 / (1.29579 - 0.35004·log10(waist + hip - neck) + 0.22100·log10(height)) - 450
///
/// # Errors
///
/// Returns `InvalidInput` if any measurement is not positive, the hip measurement is
/// missing for a woman, or the girth difference is not positive
pub fn body_fat_navy(
    waist_cm: f64,
    neck_cm: f64,
    height_cm: f64,
    gender: Gender,
    hip_cm: Option<f64>,
) -> Result<f64, AppError> {
    for (name, value) in [("Waist", waist_cm), ("Neck", neck_cm), ("Height", height_cm)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "{name} measurement must be a positive number of centimeters"
            )));
        }
    }

    let (base, girth_coef, height_coef, girth) = match gender {
        Gender::Male => (
            NAVY_MALE_BASE,
            NAVY_MALE_GIRTH_COEF,
            NAVY_MALE_HEIGHT_COEF,
            waist_cm - neck_cm,
        ),
        Gender::Female => {
            let hip = hip_cm.filter(|h| h.is_finite() && *h > 0.0).ok_or_else(|| {
                AppError::invalid_input("Hip measurement is required for the female Navy formula")
            })?;
            (
                NAVY_FEMALE_BASE,
                NAVY_FEMALE_GIRTH_COEF,
                NAVY_FEMALE_HEIGHT_COEF,
                waist_cm + hip - neck_cm,
            )
        }
    };

    if girth <= 0.0 {
        return Err(AppError::invalid_input(
            "Waist circumference must exceed neck circumference",
        ));
    }

    let density = base - girth_coef * girth.log10() + height_coef * height_cm.log10();
    Ok(round_to_tenth(NAVY_NUMERATOR / density - NAVY_OFFSET))
}

/// Healthy weight range for a height, in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    /// Weight at the lower healthy BMI
    pub min_kg: f64,
    /// Weight at the upper healthy BMI
    pub max_kg: f64,
}

/// Weight range mapping to the healthy BMI band, each bound rounded to one decimal
#[must_use]
pub fn ideal_weight_range(height: Height, config: &IdealWeightConfig) -> IdealWeightRange {
    let squared = height.meters() * height.meters();
    IdealWeightRange {
        min_kg: round_to_tenth(config.min_bmi * squared),
        max_kg: round_to_tenth(config.max_bmi * squared),
    }
}

/// Recommended daily water intake in liters
#[must_use]
pub fn water_intake(
    weight: BodyWeight,
    activity_level: ActivityLevel,
    config: &WaterIntakeConfig,
) -> f64 {
    round_to_tenth(weight.kg().mul_add(config.liters_per_kg, config.extra_for(activity_level)))
}
