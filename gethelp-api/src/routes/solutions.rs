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

//! Handler for the recent-solutions feed polled by the landing page.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use gethelp_types::{ListSolutionsQuery, SolutionsResponse};

use crate::state::AppState;

/// GET /api/solutions
///
/// Never fails: an unparseable query falls back to the default limit.
pub async fn list_solutions(
    State(state): State<AppState>,
    query: Result<Query<ListSolutionsQuery>, QueryRejection>,
) -> Json<SolutionsResponse> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let store = state.store();
    let limit = query.limit.min(store.capacity());

    Json(SolutionsResponse {
        items: store.list(limit),
    })
}
