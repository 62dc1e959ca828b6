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

//! Handler for the problem submission form.

use axum::{
    extract::{FromRequest, Request, State},
    http::header,
    Form, Json,
};
use gethelp_types::{SubmitProblemRequest, SubmitResponse};

use crate::error::SubmitError;
use crate::state::AppState;

/// Extractor that accepts the submission either as a url-encoded form post
/// or as a JSON body, depending on `Content-Type`.
#[derive(Debug)]
pub struct SubmitForm(pub SubmitProblemRequest);

impl<S: Send + Sync> FromRequest<S> for SubmitForm {
    type Rejection = SubmitError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let parsed = if is_json {
            Json::<SubmitProblemRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Form::<SubmitProblemRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map(SubmitForm).map_err(|detail| {
            tracing::warn!("Rejected unreadable submission: {detail}");
            SubmitError::Validation("Could not read the submission.")
        })
    }
}

/// POST /api/submit
pub async fn submit_problem(
    State(state): State<AppState>,
    SubmitForm(body): SubmitForm,
) -> Result<Json<SubmitResponse>, SubmitError> {
    let entry = state.pipeline.submit(body).await?;
    Ok(Json(SubmitResponse::from(&entry)))
}
