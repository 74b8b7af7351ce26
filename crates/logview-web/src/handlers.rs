//! Log page and JSON handlers.
//!
//! Fetch failures never change the status code: a missing container or a
//! daemon error is rendered as the only log line with a 200 response.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use logview_core::DEFAULT_LIMIT;
use serde::Serialize;

use crate::AppState;
use crate::page::PageView;

/// Query parameters, kept as raw strings so malformed values never reject the request.
pub type LogsQuery = HashMap<String, String>;

/// JSON body of the polling endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogsResponse {
    /// Lines, oldest first.
    pub logs: Vec<String>,
}

/// Read `limit` from the query, falling back to the default when absent or not an integer.
pub fn parse_limit(query: &LogsQuery) -> i64 {
    query
        .get("limit")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_LIMIT)
}

/// GET /logs/
/// Render the log viewer page
pub async fn logs_page(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Html<String>, PageError> {
    let limit = parse_limit(&query);
    let logs = state.fetcher.fetch(&state.container, limit).await;

    let html = state.page.render(&PageView {
        logs: &logs,
        limit,
        container: &state.container,
    })?;

    Ok(Html(html))
}

/// GET /logs/api
/// Return the log lines as JSON for client-side polling
pub async fn logs_api(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Json<LogsResponse> {
    let limit = parse_limit(&query);
    let logs = state.fetcher.fetch(&state.container, limit).await;
    Json(LogsResponse { logs })
}

/// GET /logs
/// Redirect to the canonical page route
pub async fn redirect_to_page() -> Redirect {
    Redirect::permanent("/logs/")
}

/// Failure to render the page itself, as opposed to a failed fetch.
#[derive(Debug)]
pub struct PageError(logview_core::Error);

impl From<logview_core::Error> for PageError {
    fn from(err: logview_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Page error: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}
