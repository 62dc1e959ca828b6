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

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::state::AppState;

/// GET /health, returns `{ "ok": true, "stored": <count> }`.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "ok": true, "stored": state.store().len() }))
}
