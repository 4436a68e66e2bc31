// ABOUTME: HTTP middleware for the REST API
// ABOUTME: Cross-origin configuration applied to every route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from `ServerConfig`
pub mod cors;

pub use cors::setup_cors;
