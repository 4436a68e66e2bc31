// ABOUTME: Main library entry point for the fitplan fitness tracking server
// ABOUTME: REST API over health metrics, nutrition, workouts, goals, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Server
//!
//! HTTP server for a fitness tracking application. Users record check-ins
//! (weight, height, body fat, calories, steps), follow diet plans and scheduled
//! workouts, track goals, read articles, and receive diet and workout
//! recommendations derived from their latest BMI.
//!
//! ## Architecture
//!
//! - **`fitplan-core`**: error types and domain models
//! - **`fitplan-intelligence`**: calculator, planner, rule engine, goal progress
//! - **storage**: async repository traits plus an in-memory implementation
//! - **services**: business rules shared by the route handlers
//! - **routes**: axum handlers under `/api`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan_server::config::ServerConfig;
//! use fitplan_server::resources::ServerResources;
//! use fitplan_server::routes::router;
//! use fitplan_server::storage::InMemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let resources = ServerResources::new(Arc::new(InMemoryStore::new()), config.clone());
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, router(Arc::new(resources))).await?;
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared state handed to route handlers
pub mod resources;

/// REST API routes
pub mod routes;

/// Demo account seeding
pub mod seed;

/// Business rules behind the routes
pub mod services;

/// Repository traits and the in-memory store
pub mod storage;
