// ABOUTME: Server binary wiring configuration, logging, the in-memory store, and the REST router
// ABOUTME: Optionally seeds the demo account before accepting requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitplan Server Binary
//!
//! Starts the REST API with an in-memory store. Configuration comes from the
//! environment; the flags below override it.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use fitplan_intelligence::{IntelligenceConfig, RecommendationEngine};
use fitplan_server::{
    config::ServerConfig, logging, resources::ServerResources, routes, seed::seed_demo_user,
    storage::InMemoryStore,
};
use std::future::pending;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "fitplan-server")]
#[command(about = "Fitplan - fitness tracking and recommendation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Create the demo account at startup
    #[arg(long)]
    seed_demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using configuration from the environment only");
            Args {
                http_port: None,
                seed_demo: false,
            }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.seed_demo {
        config.seed_demo_data = true;
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let intelligence = IntelligenceConfig::load()?;
    let config = Arc::new(config);
    let store = Arc::new(InMemoryStore::new());
    let resources = Arc::new(
        ServerResources::new(store, Arc::clone(&config))
            .with_engine(RecommendationEngine::with_config(intelligence)),
    );

    if config.seed_demo_data {
        let account = seed_demo_user(resources.store(), Utc::now().date_naive()).await?;
        info!(user_id = %account.user.id, username = %account.user.username, "Demo account ready");
    }

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on http://{}", config.bind_address());

    if let Err(e) = axum::serve(listener, routes::router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
