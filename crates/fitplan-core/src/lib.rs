// ABOUTME: Core types for the fitplan fitness tracking platform
// ABOUTME: Foundation crate with error handling, typed identifiers, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate providing shared types for the fitplan platform. It changes
//! infrequently so the intelligence and server crates compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `StorageError`
//! - **models**: Users, profiles, health metrics, goals, workouts, diet plans, and articles

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models and typed identifiers
pub mod models;
