//! Request tracking middleware
//!
//! Tags every request with a UUID, counts it, and logs one
//! `REQUEST_COMPLETE` line once the response is ready.

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, Uri},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use super::errors::ApiError;
use super::state::AppState;
use crate::observability::{log_event_with_fields, Event, Logger};

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4();
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    state.metrics.increment_requests();
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status().as_u16().to_string();
    let duration_ms = started_at.elapsed().as_millis().to_string();
    let id = request_id.to_string();
    log_event_with_fields(
        Event::RequestComplete,
        &[
            ("duration_ms", duration_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", id.as_str()),
            ("status", status.as_str()),
        ],
    );

    response
}

/// Router fallback for paths with no route
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> ApiError {
    state.metrics.increment_not_found();
    Logger::warn(Event::RouteNotFound.as_str(), &[("path", uri.path())]);
    ApiError::NotFound(uri.path().to_string())
}
