// ABOUTME: Educational article model
// ABOUTME: Articles are grouped by free-form category (Nutrition, Exercise, ...)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ArticleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Educational article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique article identifier
    pub id: ArticleId,
    /// Headline
    pub title: String,
    /// One-sentence teaser
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Body text
    pub content: String,
    /// Category such as "Nutrition"
    pub category: String,
    /// Estimated reading time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time_minutes: Option<u32>,
    /// Cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Publication timestamp
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Build an article from a creation payload
    #[must_use]
    pub fn from_new(new_article: NewArticle) -> Self {
        Self {
            id: ArticleId::new(),
            title: new_article.title,
            summary: new_article.summary,
            content: new_article.content,
            category: new_article.category,
            read_time_minutes: new_article.read_time_minutes,
            image_url: new_article.image_url,
            created_at: Utc::now(),
        }
    }
}

/// Article creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    /// Headline
    pub title: String,
    /// One-sentence teaser
    #[serde(default)]
    pub summary: Option<String>,
    /// Body text
    pub content: String,
    /// Category
    pub category: String,
    /// Estimated reading time in minutes
    #[serde(default)]
    pub read_time_minutes: Option<u32>,
    /// Cover image
    #[serde(default)]
    pub image_url: Option<String>,
}
