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

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Tag sent in every forwarded submission's metadata unless overridden.
pub const DEFAULT_SOURCE: &str = "GetHelp";

/// Configuration for the GetHelp submission backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8080").
    pub listen_addr: String,
    /// External responder that receives every submission.
    pub webhook_url: String,
    /// Upper bound on a single call to the responder (default: 20 seconds).
    pub webhook_timeout: Duration,
    /// Value of `metadata.source` in the forwarded payload.
    pub source: String,
    /// Directory holding the landing page. `None` serves the API only.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `WEBHOOK_URL`
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8080"`)
    /// - `WEBHOOK_TIMEOUT_SECS` (default: `"20"`)
    /// - `SUBMISSION_SOURCE` (default: `"GetHelp"`)
    /// - `STATIC_DIR`
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup("WEBHOOK_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or("WEBHOOK_URL environment variable is required")?;

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let timeout_secs = lookup("WEBHOOK_TIMEOUT_SECS")
            .unwrap_or_else(|| "20".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or("WEBHOOK_TIMEOUT_SECS must be a positive integer")?;
        let source = lookup("SUBMISSION_SOURCE")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let static_dir = lookup("STATIC_DIR")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            webhook_url,
            webhook_timeout: Duration::from_secs(timeout_secs),
            source,
            static_dir,
        })
    }
}
