// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Validates payloads, derives BMI, and joins stored records with the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Route handlers stay thin: they extract the request and call into these
//! functions, which own the business rules and talk to the store through
//! [`crate::storage::FitplanStore`].

/// Goal creation, progress updates, and computed progress percentages
pub mod goals;

/// Check-in recording with BMI derivation
pub mod health_metrics;

/// Recommendation generation from the latest check-in and the profile
pub mod recommendations;

/// User creation and profile updates
pub mod users;
