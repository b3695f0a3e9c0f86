//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use chrono::FixedOffset;
use serde::Deserialize;
use url::Url;

/// What the login flow does when the member lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginFallback {
    /// Any lookup failure (not found, upstream error, timeout) falls back to member creation.
    #[default]
    AnyError,

    /// Only a confirmed "member not found" falls back to creation; other failures are returned.
    NotFoundOnly,
}

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `FIN_API_BASE_URL` (optional): financial open API root, must end with `/`
/// - `FIN_API_KEY` (required): institution API key used for deposit calls
/// - `FIN_API_USER_KEY` (required): user key sent with deposit calls
/// - `FIN_API_INSTITUTION_CODE` (optional): defaults to `00100`
/// - `FIN_API_FINTECH_APP_NO` (optional): defaults to `001`
/// - `FIN_API_TIMEOUT_SECS` (optional): upstream request timeout, defaults to 5, must be positive
/// - `FIN_API_UTC_OFFSET_HOURS` (optional): bank clock offset for header timestamps, defaults to 9 (KST)
/// - `LOGIN_FALLBACK` (optional): `any_error` (default) or `not_found_only`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_base_url")]
    pub fin_api_base_url: String,

    pub fin_api_key: String,

    pub fin_api_user_key: String,

    #[serde(default = "default_institution_code")]
    pub fin_api_institution_code: String,

    #[serde(default = "default_fintech_app_no")]
    pub fin_api_fintech_app_no: String,

    #[serde(default = "default_timeout_secs")]
    pub fin_api_timeout_secs: u64,

    #[serde(default = "default_utc_offset_hours")]
    pub fin_api_utc_offset_hours: i32,

    #[serde(default)]
    pub login_fallback: LoginFallback,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://finopenapi.ssafy.io/ssafy/api/v1/".to_string()
}

fn default_institution_code() -> String {
    "00100".to_string()
}

fn default_fintech_app_no() -> String {
    "001".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_utc_offset_hours() -> i32 {
    9
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment: {0}")]
    Env(#[from] envy::Error),

    #[error("FIN_API_BASE_URL is not a valid URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("FIN_API_TIMEOUT_SECS must be greater than 0")]
    ZeroTimeout,

    #[error("FIN_API_UTC_OFFSET_HOURS is out of range: {0}")]
    UtcOffset(i32),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., FIN_API_KEY)
    /// - Environment variable values cannot be parsed into expected types
    /// - FIN_API_BASE_URL is not a valid absolute URL
    /// - FIN_API_TIMEOUT_SECS is 0 (every upstream call would time out)
    /// - FIN_API_UTC_OFFSET_HOURS is outside -23..=23
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        Self::from_iter(std::env::vars())
    }

    /// Build a Config from arbitrary key/value pairs (used by `from_env` and tests).
    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)?;
        config.base_url()?;

        if config.fin_api_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        config
            .utc_offset()
            .ok_or(ConfigError::UtcOffset(config.fin_api_utc_offset_hours))?;

        Ok(config)
    }

    /// Offset of the bank's clock, used for header transmission date/time.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.fin_api_utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
    }

    /// Parsed upstream base URL. Guarantees a trailing slash so relative joins keep the path prefix.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        let raw = if self.fin_api_base_url.ends_with('/') {
            self.fin_api_base_url.clone()
        } else {
            format!("{}/", self.fin_api_base_url)
        };
        Url::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let config = Config::from_iter(vars(&[
            ("FIN_API_KEY", "key"),
            ("FIN_API_USER_KEY", "user-key"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.fin_api_institution_code, "00100");
        assert_eq!(config.fin_api_fintech_app_no, "001");
        assert_eq!(config.fin_api_timeout_secs, 5);
        assert_eq!(config.utc_offset(), FixedOffset::east_opt(9 * 3600));
        assert_eq!(config.login_fallback, LoginFallback::AnyError);
    }

    #[test]
    fn reads_fallback_policy_and_port() {
        let config = Config::from_iter(vars(&[
            ("FIN_API_KEY", "key"),
            ("FIN_API_USER_KEY", "user-key"),
            ("SERVER_PORT", "8080"),
            ("LOGIN_FALLBACK", "not_found_only"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8080);
        assert_eq!(config.login_fallback, LoginFallback::NotFoundOnly);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result = Config::from_iter(vars(&[("FIN_API_USER_KEY", "user-key")]));
        assert!(matches!(result, Err(ConfigError::Env(_))));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = Config::from_iter(vars(&[
            ("FIN_API_KEY", "key"),
            ("FIN_API_USER_KEY", "user-key"),
            ("FIN_API_BASE_URL", "not a url"),
        ]));
        assert!(matches!(result, Err(ConfigError::BaseUrl(_))));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = Config::from_iter(vars(&[
            ("FIN_API_KEY", "key"),
            ("FIN_API_USER_KEY", "user-key"),
            ("FIN_API_TIMEOUT_SECS", "0"),
        ]));
        assert!(matches!(result, Err(ConfigError::ZeroTimeout)));
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let result = Config::from_iter(vars(&[
            ("FIN_API_KEY", "key"),
            ("FIN_API_USER_KEY", "user-key"),
            ("FIN_API_UTC_OFFSET_HOURS", "30"),
        ]));
        assert!(matches!(result, Err(ConfigError::UtcOffset(30))));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = Config::from_iter(vars(&[
            ("FIN_API_KEY", "key"),
            ("FIN_API_USER_KEY", "user-key"),
            ("FIN_API_BASE_URL", "http://127.0.0.1:9000/api/v1"),
        ]))
        .unwrap();

        let url = config.base_url().unwrap();
        assert_eq!(url.join("member/search").unwrap().path(), "/api/v1/member/search");
    }
}
