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

//! Axum router configuration for the GetHelp backend.

pub mod health;
pub mod solutions;
pub mod submit;

use std::any::Any;
use std::path::Path;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::{SubmitError, UNEXPECTED_ERROR};
use crate::state::AppState;

/// Build the API router without middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/submit", post(submit::submit_problem))
        .route("/api/solutions", get(solutions::list_solutions))
}

/// Build the full service: API routes, optional landing page, and layers.
///
/// When `static_dir` is set, every path the API does not handle is served
/// from it, with `index.html` as the fallback page.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = router().with_state(state);

    if let Some(dir) = static_dir {
        let index = dir.join("index.html");
        app = app.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)));
    }

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    app.layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    SubmitError::Unexpected(UNEXPECTED_ERROR.to_string()).into_response()
}
