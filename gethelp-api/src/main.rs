/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! GetHelp backend server entry point.
//!
//! A standalone Axum service that accepts problem submissions, forwards them
//! to the configured webhook, and serves the recent-solutions feed.

use anyhow::Context;
use gethelp_api::config::Config;
use gethelp_api::routes;
use gethelp_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().map_err(anyhow::Error::msg)?;
    let state = AppState::new(&config)?;

    tracing::info!(
        "Forwarding submissions to {} (timeout {:?})",
        config.webhook_url,
        config.webhook_timeout
    );
    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving landing page from {}", dir.display());
    }

    let app = routes::app(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("GetHelp backend listening on {}", config.listen_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
