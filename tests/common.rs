// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds in-memory stores, pinned-date resources, routers, and sample users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `fitplan_server`
//!
//! Every router built here runs against a fresh in-memory store with the
//! clock pinned to [`test_today`], so date-relative queries are stable.

use axum::Router;
use chrono::NaiveDate;
use fitplan_core::models::{
    ActivityLevel, FitnessGoal, Gender, NewHealthMetric, NewUser, User, UserProfile,
};
use fitplan_server::{
    config::ServerConfig, resources::ServerResources, routes, storage::InMemoryStore,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed "today" for every test: a Monday
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

/// Shorthand for building dates in assertions
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fresh in-memory store with the sample articles
pub fn create_test_store() -> Arc<InMemoryStore> {
    init_test_logging();
    Arc::new(InMemoryStore::new())
}

/// Server resources over the given store with the clock pinned
pub fn create_test_resources(store: Arc<InMemoryStore>) -> Arc<ServerResources> {
    Arc::new(
        ServerResources::new(store, Arc::new(ServerConfig::default())).with_today(test_today()),
    )
}

/// Full API router over a fresh store
pub fn create_test_app() -> (Router, Arc<ServerResources>) {
    let resources = create_test_resources(create_test_store());
    (routes::router(Arc::clone(&resources)), resources)
}

/// Profile matching the demo account
pub fn sample_profile() -> UserProfile {
    UserProfile {
        age: 30,
        gender: Gender::Male,
        height_cm: 173.0,
        activity_level: ActivityLevel::Moderate,
        goal: FitnessGoal::Maintenance,
    }
}

/// Registration payload with an optional profile
pub fn new_user(username: &str, profile: Option<UserProfile>) -> NewUser {
    NewUser {
        username: username.to_owned(),
        first_name: "Test".to_owned(),
        last_name: Some("User".to_owned()),
        email: format!("{username}@example.com"),
        profile,
    }
}

/// Check-in payload for a user with everything optional left out
pub fn new_metric(user: &User, weight_kg: f64, height_cm: Option<f64>) -> NewHealthMetric {
    NewHealthMetric {
        user_id: user.id,
        date: None,
        weight_kg,
        height_cm,
        body_fat_percent: None,
        water_intake_l: None,
        calories_consumed: None,
        calories_burned: None,
        steps: None,
        notes: None,
    }
}
