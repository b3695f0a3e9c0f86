//! Shared application state.

use std::sync::Arc;

use crate::{
    config::{Config, LoginFallback},
    services::{
        deposit_service::{DepositService, FinApiDepositService},
        fin_api_client::{FinApiClient, FinApiError},
        member_service::{FinApiMemberService, MemberService},
    },
};

/// Services and settings handed to every handler via `State`.
#[derive(Clone)]
pub struct AppState {
    pub member_service: Arc<dyn MemberService>,
    pub deposit_service: Arc<dyn DepositService>,
    pub login_fallback: LoginFallback,

    /// Upstream base URL, reported by the health check
    pub upstream: String,
}

impl AppState {
    /// Wire the production services against the financial open API.
    pub fn from_config(config: &Config) -> Result<Self, FinApiError> {
        let client = Arc::new(FinApiClient::new(config)?);
        let upstream = client.base_url().to_string();

        Ok(Self {
            member_service: Arc::new(FinApiMemberService::new(client.clone())),
            deposit_service: Arc::new(FinApiDepositService::new(client)),
            login_fallback: config.login_fallback,
            upstream,
        })
    }
}
