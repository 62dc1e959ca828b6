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

//! Submission error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as a [`SubmitResponse`] with `success: false`,
//! paired with the appropriate HTTP status code. Normalization problems are
//! not errors: they degrade to fallback text inside a successful submission.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gethelp_types::SubmitResponse;
use thiserror::Error;

use crate::store::StoreError;

/// Message used when a failure carries no usable detail.
pub const UNEXPECTED_ERROR: &str = "Unexpected error.";

/// Shown when the responder cannot be reached. The underlying error names
/// the webhook URL, so it is only logged.
pub const UNREACHABLE_ERROR: &str = "Could not reach the solution service.";

/// Shown when the responder does not answer within the configured timeout.
pub const TIMEOUT_ERROR: &str = "The solution service timed out.";

#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required field is missing. No outbound call was made.
    #[error("{0}")]
    Validation(&'static str),

    /// The external responder could not be reached, timed out, or answered
    /// with a non-2xx status. The submission is dropped.
    #[error("{0}")]
    Transport(String),

    /// Anything else, e.g. a failed store insert.
    #[error("{0}")]
    Unexpected(String),
}

impl SubmitError {
    pub fn missing_problem() -> Self {
        Self::Validation("Please describe your problem.")
    }

    pub fn missing_category() -> Self {
        Self::Validation("Please choose a category.")
    }

    pub fn missing_priority() -> Self {
        Self::Validation("Please set a priority level.")
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the visitor.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let body = SubmitResponse::failure(self.message());
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store error: {err}");
        Self::Unexpected(err.to_string())
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Webhook request failed: {err}");
        if err.is_timeout() {
            Self::Transport(TIMEOUT_ERROR.to_string())
        } else {
            Self::Transport(UNREACHABLE_ERROR.to_string())
        }
    }
}
