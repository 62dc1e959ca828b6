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

//! Shared application state passed to every Axum handler via `State`.

use crate::config::Config;
use crate::error::SubmitError;
use crate::pipeline::SubmissionPipeline;
use crate::store::SolutionStore;
use crate::webhook::WebhookClient;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Submission pipeline, which owns the webhook client and the store.
    pub pipeline: SubmissionPipeline,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, SubmitError> {
        let webhook = WebhookClient::new(&config.webhook_url, config.webhook_timeout)?;
        Ok(Self {
            pipeline: SubmissionPipeline::new(webhook, SolutionStore::new(), config.source.clone()),
        })
    }

    /// Recent-solutions store backing `GET /api/solutions`.
    pub fn store(&self) -> &SolutionStore {
        self.pipeline.store()
    }
}
