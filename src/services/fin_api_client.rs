//! HTTP client for the bank's financial open API.
//!
//! This module handles:
//! - Building the common request `Header` (transmission date/time, transaction unique number)
//! - Posting JSON and decoding JSON responses
//! - Turning bank error bodies into [`FinApiError::Rejected`]

use std::time::Duration;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Serialize, de::DeserializeOwned};
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::Config;
use crate::models::fin_api::{ErrorBody, RequestHeader};

/// Failure of a single call to the financial open API.
#[derive(Debug, thiserror::Error)]
pub enum FinApiError {
    /// The bank answered with a non-2xx status and an error code.
    #[error("bank rejected request ({status}): {code} {message}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
    },

    /// Connection, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The bank answered 2xx with a body we could not decode.
    #[error("could not decode bank response: {0}")]
    Decode(String),

    /// The base URL did not parse, or an endpoint path could not be joined onto it.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FinApiError {
    /// Bank error code, if the bank answered with one.
    pub fn code(&self) -> Option<&str> {
        match self {
            FinApiError::Rejected { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Shared client for the financial open API.
///
/// Holds a pooled `reqwest::Client`; clone the surrounding `Arc`, not this struct.
pub struct FinApiClient {
    http: reqwest::Client,
    base_url: Url,
    institution_code: String,
    fintech_app_no: String,
    api_key: String,
    user_key: String,

    /// Bank clock offset for `transmissionDate`/`transmissionTime`
    utc_offset: FixedOffset,
}

impl FinApiClient {
    /// Build a client from application configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidUrl` if the configured base URL does not parse
    /// - `Transport` if the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, FinApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fin_api_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url()?,
            institution_code: config.fin_api_institution_code.clone(),
            fintech_app_no: config.fin_api_fintech_app_no.clone(),
            api_key: config.fin_api_key.clone(),
            user_key: config.fin_api_user_key.clone(),
            // Validated at config load; UTC is only reached for a hand-built Config
            utc_offset: config.utc_offset().unwrap_or_else(|| Utc.fix()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Institution API key from configuration.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Default user key from configuration.
    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    /// Build the common `Header` for an account-level call.
    pub fn request_header(&self, api_name: &str, api_key: &str, user_key: &str) -> RequestHeader {
        self.request_header_at(Utc::now(), api_name, api_key, user_key)
    }

    /// Header stamped at `at`, rendered on the bank's clock.
    fn request_header_at(
        &self,
        at: DateTime<Utc>,
        api_name: &str,
        api_key: &str,
        user_key: &str,
    ) -> RequestHeader {
        let now = at.with_timezone(&self.utc_offset);
        let suffix = rand::random_range(0..1_000_000u32);

        RequestHeader {
            api_name: api_name.to_string(),
            transmission_date: now.format("%Y%m%d").to_string(),
            transmission_time: now.format("%H%M%S").to_string(),
            institution_code: self.institution_code.clone(),
            fintech_app_no: self.fintech_app_no.clone(),
            api_service_code: api_name.to_string(),
            institution_transaction_unique_no: transaction_unique_no(now, suffix),
            api_key: api_key.to_string(),
            user_key: user_key.to_string(),
        }
    }

    /// POST `body` as JSON to `path` (relative to the base URL) and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// - `Rejected` for any non-2xx status; code and message come from the error body
    /// - `Transport` if the request could not be sent or the body could not be read
    /// - `Decode` if a 2xx body does not match `R`
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, FinApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        tracing::debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| FinApiError::Decode(e.to_string()));
        }

        // Error bodies are best effort: fall back to the raw text when they are not JSON
        let (code, message) = serde_json::from_slice::<ErrorBody>(&bytes)
            .map(ErrorBody::into_parts)
            .unwrap_or_default();

        let error = FinApiError::Rejected {
            status: status.as_u16(),
            code: code.unwrap_or_else(|| "UNKNOWN".to_string()),
            message: message.unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned()),
        };
        tracing::warn!("{} {}: {}", path, status, error);

        Err(error)
    }
}

/// `YYYYMMDD` + `HHMMSS` + 6-digit suffix.
fn transaction_unique_no(now: DateTime<FixedOffset>, suffix: u32) -> String {
    format!("{}{:06}", now.format("%Y%m%d%H%M%S"), suffix % 1_000_000)
}

/// Short SHA-256 fingerprint of an API key, safe to log.
pub fn key_fingerprint(api_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hex::encode(&hasher.finalize()[..4])
}
