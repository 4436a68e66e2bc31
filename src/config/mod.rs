// ABOUTME: Configuration module for the fitplan server
// ABOUTME: Environment-driven server settings; calculator constants live in fitplan-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
pub use fitplan_intelligence::config::IntelligenceConfig;
