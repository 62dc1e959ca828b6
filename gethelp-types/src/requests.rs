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

//! Request types for the GetHelp REST API.
//!
//! These types define the shape of request bodies and query parameters.
//! They are used by both the server (for deserialization) and clients
//! (for serialization).

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/submit`.
///
/// Every field defaults to the empty string so that a form post with a
/// missing field reaches validation and gets a field-specific message
/// instead of a generic decoding error.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SubmitProblemRequest {
    /// Free-form description of the visitor's problem.
    #[serde(default)]
    pub problem: String,

    /// Category label picked from the page's option list.
    #[serde(default)]
    pub category: String,

    /// Priority label picked from the page's option list.
    #[serde(default)]
    pub priority: String,
}

impl SubmitProblemRequest {
    pub fn new(
        problem: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            problem: problem.into(),
            category: category.into(),
            priority: priority.into(),
        }
    }
}

/// Query parameters for `GET /api/solutions`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ListSolutionsQuery {
    /// Maximum number of entries to return. Defaults to 12.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Number of entries the recent-solutions feed shows.
pub const DEFAULT_LIST_LIMIT: usize = 12;

fn default_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for ListSolutionsQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_submit_fields_default_to_empty() {
        let req: SubmitProblemRequest = serde_json::from_str(r#"{"problem":"disk full"}"#).unwrap();
        assert_eq!(req.problem, "disk full");
        assert_eq!(req.category, "");
        assert_eq!(req.priority, "");
    }

    #[test]
    fn list_query_defaults_to_feed_size() {
        let q: ListSolutionsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.limit, DEFAULT_LIST_LIMIT);
    }
}
