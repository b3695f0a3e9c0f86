//! Success envelope shared by every endpoint.
//!
//! ```json
//! {
//!   "status": "success",
//!   "data": { ... },
//!   "timestamp": "2025-12-20T10:00:00Z"
//! }
//! ```
//!
//! Error envelopes are produced by [`crate::error::AppError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Uniform wrapper for successful handler results.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `"success"` for this type.
    pub status: &'static str,

    /// Handler payload, serialized unchanged.
    pub data: T,

    /// When the response was built.
    pub timestamp: DateTime<Utc>,
}

/// Wrap a handler result in the success envelope.
pub fn success_response<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse {
        status: "success",
        data,
        timestamp: Utc::now(),
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
