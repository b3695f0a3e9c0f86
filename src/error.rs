//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

use crate::services::fin_api_client::FinApiError;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Upstream Errors**: The financial open API rejected the call or could not be reached
/// - **Resource Errors**: Requested member not found
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Call to the financial open API failed.
    ///
    /// Rejections (the bank answered with an error code) return HTTP 422;
    /// transport and decode failures return HTTP 502.
    #[error("Upstream error: {0}")]
    Upstream(#[from] FinApiError),

    /// No member is registered for the given (apiKey, userId).
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Member not found")]
    MemberNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl AppError {
    /// True when the error means the member does not exist, as opposed to a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::MemberNotFound)
    }
}

/// Malformed JSON bodies and missing fields become `InvalidRequest` so they share the error envelope.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "status": "error",
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   },
///   "timestamp": "2025-12-20T10:00:00Z"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `MemberNotFound` → 404 Not Found
/// - `Upstream(Rejected)` → 422 Unprocessable Entity (bank message passed through)
/// - `Upstream(Transport | Decode)` → 502 Bad Gateway (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::MemberNotFound => {
                (StatusCode::NOT_FOUND, "member_not_found", self.to_string())
            }
            AppError::Upstream(FinApiError::Rejected {
                ref code,
                ref message,
                ..
            }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "upstream_rejected",
                format!("{code}: {message}"),
            ),
            AppError::Upstream(ref e) => {
                tracing::error!("upstream failure: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_unavailable",
                    "The banking service is unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "status": "error",
            "error": {
                "code": code,
                "message": message
            },
            "timestamp": Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}
