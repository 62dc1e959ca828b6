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

//! Shared API types for the GetHelp submission backend.
//!
//! This crate defines the API contract between the submission backend,
//! the landing page that posts to it, and the external responder it
//! forwards to. It is intentionally framework-agnostic: no axum, no reqwest.

pub mod requests;
pub mod responses;
pub mod webhook;

pub use requests::{ListSolutionsQuery, SubmitProblemRequest, DEFAULT_LIST_LIMIT};
pub use responses::{SolutionsResponse, StoredSolution, SubmitResponse};
pub use webhook::{SubmissionMetadata, WebhookPayload};
