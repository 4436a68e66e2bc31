// ABOUTME: System-wide constants and configuration defaults for the fitplan server
// ABOUTME: Ports, query limits, service names, and demo account values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults. Anything tunable at runtime is read by
//! [`crate::config::environment::ServerConfig`].

/// Service identity used in logs
pub mod service_names {
    /// Name of the HTTP server
    pub const FITPLAN_SERVER: &str = "fitplan-server";
    /// Version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
}

/// Query limits
pub mod limits {
    /// Upcoming workouts returned when the caller gives no limit
    pub const DEFAULT_UPCOMING_WORKOUTS_LIMIT: usize = 5;
    /// Articles returned when the caller gives no limit
    pub const DEFAULT_ARTICLES_LIMIT: usize = 10;
}

/// Demo account created by the seeder
pub mod demo {
    /// Username of the demo account
    pub const USERNAME: &str = "demo_user";
    /// Display first name
    pub const FIRST_NAME: &str = "User";
    /// Contact email
    pub const EMAIL: &str = "user@example.com";
    /// Body weight in kg
    pub const WEIGHT_KG: f64 = 68.0;
    /// Height in cm
    pub const HEIGHT_CM: f64 = 173.0;
    /// Age in years
    pub const AGE: u32 = 30;
    /// Calories on the seeded check-in and the seeded plan
    pub const DAILY_CALORIES: u32 = 1850;
    /// Weight the seeded goal started from
    pub const GOAL_START_KG: f64 = 75.0;
    /// Weight the seeded goal aims for
    pub const GOAL_TARGET_KG: f64 = 65.0;
    /// Months until the seeded goal's deadline
    pub const GOAL_HORIZON_MONTHS: u32 = 3;
}
