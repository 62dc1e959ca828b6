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

//! Payload forwarded to the external responder.

use serde::{Deserialize, Serialize};

/// Body of the outbound `POST` to the configured webhook.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct WebhookPayload {
    pub problem: String,
    pub category: String,
    pub priority: String,
    pub metadata: SubmissionMetadata,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionMetadata {
    /// RFC 3339 timestamp in UTC, e.g. `2025-01-31T09:15:00.000Z`.
    pub submitted_at: String,
    /// Fixed tag identifying where the submission came from.
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_uses_camel_case_keys() {
        let payload = WebhookPayload {
            problem: "p".to_string(),
            category: "c".to_string(),
            priority: "high".to_string(),
            metadata: SubmissionMetadata {
                submitted_at: "2025-01-31T09:15:00.000Z".to_string(),
                source: "GetHelp".to_string(),
            },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["metadata"]["submittedAt"], "2025-01-31T09:15:00.000Z");
        assert_eq!(json["metadata"]["source"], "GetHelp");
        assert_eq!(json["priority"], "high");
    }
}
