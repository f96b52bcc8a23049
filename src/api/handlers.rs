//! HTTP request handlers for the leave lookup API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::pipeline::run_search;

use super::request::SearchParams;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .with_state(state)
}

/// Handler for GET /search endpoint.
///
/// Accepts a free-text search term and returns the matching leave summaries
/// from all configured report sources.
async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing search request");

    // Handle query string errors (missing or malformed `term`)
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query rejection"
            );
            let error = ApiError::validation_error(rejection.body_text());
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // The pipeline is synchronous and may block on source retrieval, so it
    // runs off the async worker threads.
    let start_time = Instant::now();
    let search_state = state.clone();
    let term = params.term.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        run_search(&term, search_state.sources(), search_state.fetcher().as_ref())
    })
    .await;

    let result = match outcome {
        Ok(result) => result,
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Search task failed"
            );
            let error = ApiError::internal_error("Search task failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match result {
        Ok(summaries) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                term = %params.term,
                matches = summaries.len(),
                duration_us = duration.as_micros(),
                "Search completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summaries),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                term = %params.term,
                error = %err,
                "Search failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
