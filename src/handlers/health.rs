//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Financial open API base URL this instance talks to
    pub upstream: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "upstream": "https://finopenapi.ssafy.io/ssafy/api/v1/",
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
///
/// The bank is not called; this only reports that the process is serving.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        upstream: state.upstream,
        timestamp: Utc::now(),
    })
}
