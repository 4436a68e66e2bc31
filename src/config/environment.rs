// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, environment mode, seeding, and query limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based server configuration

use crate::constants::{limits, network};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Create the demo account at startup
    pub seed_demo_data: bool,
    /// Default number of upcoming workouts returned
    pub upcoming_workouts_limit: usize,
    /// Default number of articles returned
    pub articles_limit: usize,
    /// Comma-separated CORS origins, `*` for any
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: network::DEFAULT_HTTP_PORT,
            host: network::DEFAULT_HOST.to_owned(),
            environment: Environment::Development,
            seed_demo_data: false,
            upcoming_workouts_limit: limits::DEFAULT_UPCOMING_WORKOUTS_LIMIT,
            articles_limit: limits::DEFAULT_ARTICLES_LIMIT,
            cors_allowed_origins: "*".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_parse_or("HTTP_PORT", network::DEFAULT_HTTP_PORT)?,
            host: env::var("HOST").unwrap_or_else(|_| network::DEFAULT_HOST.to_owned()),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            seed_demo_data: env_parse_or("SEED_DEMO_DATA", false)?,
            upcoming_workouts_limit: env_parse_or(
                "UPCOMING_WORKOUTS_LIMIT",
                limits::DEFAULT_UPCOMING_WORKOUTS_LIMIT,
            )?,
            articles_limit: env_parse_or("ARTICLES_LIMIT", limits::DEFAULT_ARTICLES_LIMIT)?,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_owned()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error when a limit is zero
    pub fn validate(&self) -> Result<()> {
        if self.upcoming_workouts_limit == 0 {
            anyhow::bail!("UPCOMING_WORKOUTS_LIMIT must be at least 1");
        }
        if self.articles_limit == 0 {
            anyhow::bail!("ARTICLES_LIMIT must be at least 1");
        }
        Ok(())
    }

    /// Address to bind the HTTP listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitplan server configuration: environment={}, bind={}, seed_demo_data={}, upcoming_limit={}, articles_limit={}",
            self.environment,
            self.bind_address(),
            self.seed_demo_data,
            self.upcoming_workouts_limit,
            self.articles_limit
        )
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}
