//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Extracts the JSON request body
//! 2. Delegates to a service
//! 3. Wraps the result in the success envelope

use axum::extract::FromRequest;

use crate::error::AppError;

/// Deposit account endpoints
pub mod deposits;
/// Health check endpoint
pub mod health;
/// Member endpoints
pub mod members;

/// `Json` extractor whose rejection is rendered with the application error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
