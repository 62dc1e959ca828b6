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

//! Client for the external responder that answers submissions.
//!
//! Each submission is forwarded exactly once. There are no retries: a failed
//! call is reported back to the visitor and the submission is dropped.

use std::time::Duration;

use gethelp_types::WebhookPayload;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;

use crate::error::SubmitError;
use crate::normalize::{normalize_any, normalize_text, NO_SOLUTION_TEXT};

const ACCEPT_JSON_THEN_TEXT: &str = "application/json, text/plain;q=0.8";

/// Largest reply body read from the responder (1 MiB).
pub const MAX_REPLY_BYTES: usize = 1024 * 1024;

pub const OVERSIZED_REPLY_ERROR: &str = "The solution service sent an oversized reply.";

/// Sends submissions to the configured webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    http: reqwest::Client,
    max_reply_bytes: usize,
}

impl WebhookClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            url: url.to_string(),
            http,
            max_reply_bytes: MAX_REPLY_BYTES,
        })
    }

    /// Override the reply size limit.
    pub fn with_max_reply_bytes(mut self, limit: usize) -> Self {
        self.max_reply_bytes = limit;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `payload` to the responder and return its raw reply.
    pub async fn forward(&self, payload: &WebhookPayload) -> Result<WebhookReply, SubmitError> {
        let resp = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, ACCEPT_JSON_THEN_TEXT)
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = self.read_body(resp).await.unwrap_or_default();
            tracing::error!("Webhook returned HTTP {status}: {body}");
            return Err(SubmitError::Transport(format!(
                "The solution service returned HTTP {}.",
                status.as_u16()
            )));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = self.read_body(resp).await?;

        Ok(WebhookReply { content_type, body })
    }

    /// Read the reply body, giving up once it exceeds `max_reply_bytes`.
    async fn read_body(&self, mut resp: reqwest::Response) -> Result<String, SubmitError> {
        let limit = self.max_reply_bytes;
        if let Some(len) = resp.content_length().filter(|len| *len > limit as u64) {
            tracing::error!("Webhook reply declares {len} bytes, limit is {limit}");
            return Err(SubmitError::Transport(OVERSIZED_REPLY_ERROR.to_string()));
        }

        let mut buf = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            if buf.len() + chunk.len() > limit {
                tracing::error!("Webhook reply exceeded {limit} bytes");
                return Err(SubmitError::Transport(OVERSIZED_REPLY_ERROR.to_string()));
            }
            buf.extend_from_slice(&chunk);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// A successful reply from the responder, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    pub content_type: String,
    pub body: String,
}

impl WebhookReply {
    pub fn is_json(&self) -> bool {
        self.content_type.contains("application/json")
    }

    /// Plain text to show the visitor. Never empty.
    ///
    /// A body declared as JSON that fails to parse is not an error; it
    /// degrades to [`NO_SOLUTION_TEXT`].
    pub fn solution_text(&self) -> String {
        let text = if self.is_json() {
            match serde_json::from_str::<Value>(&self.body) {
                Ok(value) => normalize_any(&value),
                Err(err) => {
                    tracing::warn!("Webhook declared JSON but sent an unparseable body: {err}");
                    String::new()
                }
            }
        } else {
            normalize_text(&self.body)
        };

        let text = text.trim();
        if text.is_empty() {
            NO_SOLUTION_TEXT.to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(content_type: &str, body: &str) -> WebhookReply {
        WebhookReply {
            content_type: content_type.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn json_reply_is_parsed() {
        let r = reply("application/json; charset=utf-8", r#"{"solution":"Do X then Y"}"#);
        assert!(r.is_json());
        assert_eq!(r.solution_text(), "Do X then Y");
    }

    #[test]
    fn text_reply_is_cleaned() {
        let r = reply("text/plain", "answer: Try restarting the service");
        assert_eq!(r.solution_text(), "Try restarting the service");
    }

    #[test]
    fn json_looking_text_without_json_type_is_still_parsed() {
        let r = reply("text/html", r#"{"answer":"Flush DNS"}"#);
        assert_eq!(r.solution_text(), "Flush DNS");
    }

    #[test]
    fn empty_reply_falls_back() {
        assert_eq!(reply("text/plain", "").solution_text(), NO_SOLUTION_TEXT);
        assert_eq!(reply("", "   ").solution_text(), NO_SOLUTION_TEXT);
        assert_eq!(
            reply("application/json", r#"{"solution":""}"#).solution_text(),
            NO_SOLUTION_TEXT
        );
    }

    #[test]
    fn malformed_json_falls_back() {
        let r = reply("application/json", r#"{"solution": "half"#);
        assert_eq!(r.solution_text(), NO_SOLUTION_TEXT);
    }
}
