//! Member service - registration and lookup against the bank.
//!
//! This service handles:
//! - Creating members through the financial open API
//! - Looking members up by (apiKey, userId)
//! - The login flow: look up, and fall back to creation when the lookup fails

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::LoginFallback,
    error::AppError,
    models::member::{MemberRequest, MemberResponse, MemberSearchRequest, MemberSearchResponse},
    services::fin_api_client::{FinApiClient, FinApiError, key_fingerprint},
};

/// Bank error code for "no member with this userId".
const MEMBER_NOT_FOUND_CODE: &str = "E4003";

/// Member operations used by the HTTP handlers.
#[async_trait]
pub trait MemberService: Send + Sync {
    /// Register a new member. No deduplication: each call is a separate creation attempt.
    async fn create_member(&self, request: &MemberRequest) -> Result<MemberResponse, AppError>;

    /// Look up a member.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the bank has no such member
    /// - `Upstream` for any other failure
    async fn search_member(
        &self,
        request: &MemberSearchRequest,
    ) -> Result<MemberSearchResponse, AppError>;
}

/// Outcome of the lookup half of the login flow.
#[derive(Debug)]
pub enum MemberLookup {
    Found(MemberSearchResponse),
    NotFound,
    Failed(AppError),
}

impl From<Result<MemberSearchResponse, AppError>> for MemberLookup {
    fn from(result: Result<MemberSearchResponse, AppError>) -> Self {
        match result {
            Ok(found) => MemberLookup::Found(found),
            Err(e) if e.is_not_found() => MemberLookup::NotFound,
            Err(e) => MemberLookup::Failed(e),
        }
    }
}

/// Log in an existing member, or register one when the lookup fails.
///
/// # Process
///
/// 1. Search by (apiKey, userId)
/// 2. Found: return the stored record unchanged
/// 3. Not found: create from the full request
/// 4. Lookup failed for another reason: create under `AnyError`, return the error under `NotFoundOnly`
///
/// # Errors
///
/// A failed creation is returned as-is; there is no second fallback.
pub async fn login_or_create(
    service: &dyn MemberService,
    request: &MemberRequest,
    policy: LoginFallback,
) -> Result<MemberResponse, AppError> {
    let lookup = MemberLookup::from(service.search_member(&request.search_request()).await);

    match lookup {
        MemberLookup::Found(found) => Ok(found.into()),
        MemberLookup::NotFound => {
            tracing::info!("member {} not found, creating", request.user_id);
            service.create_member(request).await
        }
        MemberLookup::Failed(e) => match policy {
            LoginFallback::AnyError => {
                tracing::warn!(
                    "member lookup for {} failed ({}), falling back to creation",
                    request.user_id,
                    e
                );
                service.create_member(request).await
            }
            LoginFallback::NotFoundOnly => Err(e),
        },
    }
}

/// `MemberService` backed by the financial open API.
pub struct FinApiMemberService {
    client: Arc<FinApiClient>,
}

impl FinApiMemberService {
    pub fn new(client: Arc<FinApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberService for FinApiMemberService {
    async fn create_member(&self, request: &MemberRequest) -> Result<MemberResponse, AppError> {
        tracing::info!(
            "creating member {} (key {})",
            request.user_id,
            key_fingerprint(&request.api_key)
        );

        let member = self.client.post_json("member/", request).await?;
        Ok(member)
    }

    async fn search_member(
        &self,
        request: &MemberSearchRequest,
    ) -> Result<MemberSearchResponse, AppError> {
        tracing::debug!(
            "searching member {} (key {})",
            request.user_id,
            key_fingerprint(&request.api_key)
        );

        self.client
            .post_json("member/search", request)
            .await
            .map_err(classify)
    }
}

/// Map a bank error to `AppError`, treating the "unknown user" code as `MemberNotFound`.
fn classify(e: FinApiError) -> AppError {
    match e.code() {
        Some(MEMBER_NOT_FOUND_CODE) => AppError::MemberNotFound,
        _ => AppError::from(e),
    }
}
