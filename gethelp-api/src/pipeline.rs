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

//! The submission pipeline: validate, forward, normalize, record.

use chrono::{SecondsFormat, Utc};
use gethelp_types::{
    StoredSolution, SubmissionMetadata, SubmitProblemRequest, SubmitResponse, WebhookPayload,
};
use uuid::Uuid;

use crate::error::SubmitError;
use crate::store::SolutionStore;
use crate::webhook::WebhookClient;

/// A submission whose fields have been trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub problem: String,
    pub category: String,
    pub priority: String,
}

impl Submission {
    /// Trim every field and reject the first empty one, checked in the
    /// order problem, category, priority.
    pub fn from_request(req: SubmitProblemRequest) -> Result<Self, SubmitError> {
        let problem = req.problem.trim();
        if problem.is_empty() {
            return Err(SubmitError::missing_problem());
        }
        let category = req.category.trim();
        if category.is_empty() {
            return Err(SubmitError::missing_category());
        }
        let priority = req.priority.trim();
        if priority.is_empty() {
            return Err(SubmitError::missing_priority());
        }

        Ok(Self {
            problem: problem.to_string(),
            category: category.to_string(),
            priority: priority.to_string(),
        })
    }

    fn payload(&self, source: &str) -> WebhookPayload {
        WebhookPayload {
            problem: self.problem.clone(),
            category: self.category.clone(),
            priority: self.priority.clone(),
            metadata: SubmissionMetadata {
                submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                source: source.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionPipeline {
    webhook: WebhookClient,
    store: SolutionStore,
    source: String,
}

impl SubmissionPipeline {
    pub fn new(webhook: WebhookClient, store: SolutionStore, source: impl Into<String>) -> Self {
        Self {
            webhook,
            store,
            source: source.into(),
        }
    }

    pub fn store(&self) -> &SolutionStore {
        &self.store
    }

    /// Run one submission end to end.
    ///
    /// On success the new entry has already been added to the store. On
    /// failure nothing is stored.
    pub async fn submit(&self, req: SubmitProblemRequest) -> Result<StoredSolution, SubmitError> {
        let submission = Submission::from_request(req)?;

        tracing::debug!(
            "Forwarding submission (category={}, priority={}) to {}",
            submission.category,
            submission.priority,
            self.webhook.url()
        );
        let reply = self
            .webhook
            .forward(&submission.payload(&self.source))
            .await
            .inspect_err(|e| tracing::error!("Webhook call failed: {e}"))?;

        let entry = StoredSolution {
            id: Uuid::new_v4().to_string(),
            problem: submission.problem,
            category: submission.category,
            priority: submission.priority,
            solution: reply.solution_text(),
            timestamp: Utc::now().timestamp_millis(),
        };
        self.store.insert(entry.clone())?;

        tracing::info!("Recorded solution {}", entry.id);
        Ok(entry)
    }

    /// Like [`SubmissionPipeline::submit`], with every outcome folded into
    /// the structured result shown to the visitor.
    pub async fn submit_response(&self, req: SubmitProblemRequest) -> SubmitResponse {
        match self.submit(req).await {
            Ok(entry) => SubmitResponse::from(&entry),
            Err(err) => SubmitResponse::failure(err.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request(problem: &str, category: &str, priority: &str) -> SubmitProblemRequest {
        SubmitProblemRequest::new(problem, category, priority)
    }

    #[test]
    fn fields_are_trimmed() {
        let s = Submission::from_request(request("  VPN drops  ", " network ", "high\n")).unwrap();
        assert_eq!(s.problem, "VPN drops");
        assert_eq!(s.category, "network");
        assert_eq!(s.priority, "high");
    }

    #[test]
    fn first_missing_field_wins() {
        let cases = [
            (request(" ", "", ""), "Please describe your problem."),
            (request("x", "\t", ""), "Please choose a category."),
            (request("x", "y", "  "), "Please set a priority level."),
        ];
        for (req, expected) in cases {
            let err = Submission::from_request(req).unwrap_err();
            assert!(matches!(err, SubmitError::Validation(_)));
            assert_eq!(err.message(), expected);
        }
    }

    #[test]
    fn payload_carries_metadata() {
        let s = Submission::from_request(request("p", "c", "low")).unwrap();
        let payload = s.payload("GetHelp");
        assert_eq!(payload.metadata.source, "GetHelp");
        assert!(payload.metadata.submitted_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&payload.metadata.submitted_at).is_ok());
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_network() {
        // Nothing listens on this port; a network attempt would be a transport error.
        let webhook = WebhookClient::new("http://127.0.0.1:9/hook", Duration::from_secs(1)).unwrap();
        let pipeline = SubmissionPipeline::new(webhook, SolutionStore::new(), "GetHelp");

        let resp = pipeline.submit_response(request("", "c", "p")).await;
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Please describe your problem."));
        assert!(pipeline.store().is_empty());
    }

    #[tokio::test]
    async fn unreachable_webhook_is_a_transport_error() {
        let webhook = WebhookClient::new("http://127.0.0.1:9/hook", Duration::from_secs(2)).unwrap();
        let pipeline = SubmissionPipeline::new(webhook, SolutionStore::new(), "GetHelp");

        let err = pipeline.submit(request("p", "c", "low")).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
        assert!(pipeline.store().is_empty());
    }
}
