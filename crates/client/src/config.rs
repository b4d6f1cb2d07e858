//! Client configuration
//!
//! ## Environment Variables
//! - `SHOPFRONT_API_BASE_URL`: origin of the storefront API
//! - `SHOPFRONT_API_TIMEOUT_SECS`: request timeout in seconds
//!
//! Unset variables fall back to the defaults; invalid values are
//! rejected as configuration errors.

use std::time::Duration;

use crate::api::errors::ApiError;

/// Production origin used when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://api.shopfront.dev";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the API client facade
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base origin for all requests, without a trailing slash
    pub base_url: String,
    /// Timeout applied to every request
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("shopfront-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiClientConfig {
    /// Create a configuration pointing at the given origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: normalize_base_url(base_url.into()), ..Self::default() }
    }

    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("SHOPFRONT_API_BASE_URL") {
            if base_url.trim().is_empty() {
                return Err(ApiError::Config("SHOPFRONT_API_BASE_URL is empty".to_string()));
            }
            config.base_url = normalize_base_url(base_url);
        }

        if let Ok(secs) = std::env::var("SHOPFRONT_API_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|e| {
                ApiError::Config(format!("Invalid SHOPFRONT_API_TIMEOUT_SECS: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "configuration loaded");
        Ok(config)
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}
