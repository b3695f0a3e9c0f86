//! Member HTTP handlers.
//!
//! This module implements the member-related API endpoints:
//! - POST /api/member/login - Look up a member, registering it if the lookup fails
//! - POST /api/member/create - Register a member
//! - POST /api/member/search - Look up a member

use axum::extract::State;

use crate::{
    error::AppError,
    handlers::ApiJson,
    models::member::{MemberRequest, MemberResponse, MemberSearchRequest, MemberSearchResponse},
    response::{ApiResponse, success_response},
    services::member_service,
    state::AppState,
};

/// Log in, creating the member on first use.
///
/// # Request Body
///
/// ```json
/// {
///   "apiKey": "a1b2c3...",
///   "userId": "alice@example.com",
///   "userName": "Alice"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: The existing member, or the one just created
/// - **Error (422/502)**: Creation failed after the lookup failed
///
/// Whether a non-"not found" lookup failure also triggers creation is set by `LOGIN_FALLBACK`.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MemberRequest>,
) -> Result<ApiResponse<MemberResponse>, AppError> {
    let member = member_service::login_or_create(
        state.member_service.as_ref(),
        &request,
        state.login_fallback,
    )
    .await?;

    Ok(success_response(member))
}

/// Register a member.
///
/// # Response
///
/// - **Success (200 OK)**: The created member
/// - **Error (422)**: The bank rejected the registration (e.g. the userId already exists)
pub async fn create_member(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MemberRequest>,
) -> Result<ApiResponse<MemberResponse>, AppError> {
    let member = state.member_service.create_member(&request).await?;

    Ok(success_response(member))
}

/// Look up a member.
///
/// # Response
///
/// - **Success (200 OK)**: The stored member
/// - **Error (404)**: No member with this userId
pub async fn search_member(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MemberSearchRequest>,
) -> Result<ApiResponse<MemberSearchResponse>, AppError> {
    let member = state.member_service.search_member(&request).await?;

    Ok(success_response(member))
}
