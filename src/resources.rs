// ABOUTME: Shared server resources handed to every route module as axum state
// ABOUTME: Holds the injected store, the server configuration, and the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::storage::FitplanStore;
use chrono::{NaiveDate, Utc};
use fitplan_intelligence::RecommendationEngine;
use std::sync::Arc;

/// Dependencies shared by all handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Repository implementation
    pub store: Arc<dyn FitplanStore>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Rule engine with its loaded configuration
    pub recommendation_engine: Arc<RecommendationEngine>,
    /// Fixed calendar day for date-relative queries; the UTC date when unset
    pub today_override: Option<NaiveDate>,
}

impl ServerResources {
    /// Create resources using the globally loaded intelligence configuration
    #[must_use]
    pub fn new(store: Arc<dyn FitplanStore>, config: Arc<ServerConfig>) -> Self {
        Self {
            store,
            config,
            recommendation_engine: Arc::new(RecommendationEngine::new()),
            today_override: None,
        }
    }

    /// Replace the recommendation engine
    #[must_use]
    pub fn with_engine(mut self, engine: RecommendationEngine) -> Self {
        self.recommendation_engine = Arc::new(engine);
        self
    }

    /// Pin the calendar day
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today_override = Some(today);
        self
    }

    /// Calendar day used by date-relative queries
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today_override.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Store as a trait object reference
    #[must_use]
    pub fn store(&self) -> &dyn FitplanStore {
        self.store.as_ref()
    }
}
