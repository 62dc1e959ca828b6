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

//! Response types for the GetHelp REST API.
//!
//! `POST /api/submit` always answers with a [`SubmitResponse`]:
//! - On success: `{ "success": true,  "id": "...", "solution": "..." }`
//! - On failure: `{ "success": false, "error": "..." }`
//!
//! `GET /api/solutions` answers with a [`SolutionsResponse`].

use serde::{Deserialize, Serialize};

/// One completed submission as kept in the recent-solutions feed.
///
/// Created exactly once per successful submission and never modified.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StoredSolution {
    pub id: String,
    pub problem: String,
    pub category: String,
    pub priority: String,
    /// Plain text produced by normalizing the responder's reply.
    pub solution: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Structured outcome of a submission.
///
/// Exactly one of `id`/`solution` (success) or `error` (failure) is present.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    /// Wrap a successful submission.
    pub fn ok(id: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
            solution: Some(solution.into()),
            error: None,
        }
    }

    /// Wrap a failed submission with a human-readable message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            id: None,
            solution: None,
            error: Some(error.into()),
        }
    }
}

impl From<&StoredSolution> for SubmitResponse {
    fn from(entry: &StoredSolution) -> Self {
        Self::ok(entry.id.clone(), entry.solution.clone())
    }
}

/// Response payload for `GET /api/solutions`, newest first.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SolutionsResponse {
    pub items: Vec<StoredSolution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_omits_error_field() {
        let json = serde_json::to_value(SubmitResponse::ok("abc", "Restart it")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "id": "abc", "solution": "Restart it" })
        );
    }

    #[test]
    fn failure_carries_only_error() {
        let json = serde_json::to_value(SubmitResponse::failure("Please choose a category."))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Please choose a category." })
        );
    }
}
