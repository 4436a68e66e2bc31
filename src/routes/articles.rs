// ABOUTME: Route handlers for educational articles
// ABOUTME: Lists articles with optional category filter and limit, fetches and publishes articles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ApiJson, ApiQuery, parse_body, parse_id, require_text};
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::storage::ArticleRepository;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fitplan_core::models::{Article, ArticleId, NewArticle};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Query parameters for listing articles
#[derive(Debug, Deserialize, Default)]
pub struct ListArticlesQuery {
    /// Maximum number of articles; defaults to `ARTICLES_LIMIT`
    pub limit: Option<usize>,
    /// Case-insensitive category filter
    pub category: Option<String>,
}

/// Article routes implementation
pub struct ArticleRoutes;

impl ArticleRoutes {
    /// Create all article routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/articles",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/api/articles/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle GET /api/articles
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        ApiQuery(query): ApiQuery<ListArticlesQuery>,
    ) -> Result<Response, AppError> {
        let limit = query.limit.unwrap_or(resources.config.articles_limit);
        let articles = resources
            .store
            .list_articles(query.category.as_deref(), limit)
            .await?;
        Ok((StatusCode::OK, Json(articles)).into_response())
    }

    /// Handle GET /api/articles/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(article_id): Path<String>,
    ) -> Result<Response, AppError> {
        let article_id: ArticleId = parse_id(&article_id, "article")?;
        let article = resources
            .store
            .get_article(article_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Article {article_id}")))?;
        Ok((StatusCode::OK, Json(article)).into_response())
    }

    /// Handle POST /api/articles
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        ApiJson(body): ApiJson<Value>,
    ) -> Result<Response, AppError> {
        let new_article: NewArticle = parse_body(body)?;
        require_text("title", &new_article.title)?;
        require_text("category", &new_article.category)?;

        let article = resources
            .store
            .create_article(Article::from_new(new_article))
            .await?;
        Ok((StatusCode::CREATED, Json(article)).into_response())
    }
}
