//! Time HTTP Routes
//!
//! `GET /time` returns `{"current_time": "<ISO-8601>"}`.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::state::AppState;
use crate::clock::CurrentTimeResponse;

/// Create time routes
pub fn time_routes(state: AppState) -> Router {
    Router::new()
        .route("/time", get(current_time_handler))
        .with_state(state)
}

/// Reads the clock on every call; nothing is cached between requests
async fn current_time_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<CurrentTimeResponse>) {
    let response = state.time.current_time_response();
    state.metrics.increment_time_requests();
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, TimeService};
    use chrono::DateTime;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_handler_uses_clock() {
        let instant = DateTime::parse_from_rfc3339("2024-07-08T09:10:11.5Z").unwrap();
        let state = AppState::new(TimeService::new(Arc::new(FixedClock::new(instant))));

        let (status, Json(body)) = current_time_handler(State(state.clone())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.current_time, "2024-07-08T09:10:11.500000Z");
        assert_eq!(state.metrics.snapshot().time_requests, 1);
    }
}
