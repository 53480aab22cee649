//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_BASE_URL` - Origin of the shop API (default: `http://127.0.0.1:8000`)
//! - `SHOPFRONT_USER_ID` - Identity sent as `user_id` on every request
//!   (default: `demo-user`)

use thiserror::Error;
use url::Url;

/// API origin used when `SHOPFRONT_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Demo identity used when `SHOPFRONT_USER_ID` is unset.
///
/// There is no authentication flow; every request carries this fixed
/// `user_id`.
pub const DEFAULT_USER_ID: &str = "demo-user";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Shop API client configuration.
///
/// The base URL and user identity are explicit construction-time values
/// rather than module globals, so tests and the CLI can substitute them.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the shop API.
    pub base_url: Url,
    /// Identity sent as `user_id` on every request.
    pub user_id: String,
}

impl ClientConfig {
    /// Build a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn new(base_url: &str, user_id: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            user_id: user_id.into(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SHOPFRONT_BASE_URL` is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("SHOPFRONT_BASE_URL", DEFAULT_BASE_URL);
        let user_id = get_env_or_default("SHOPFRONT_USER_ID", DEFAULT_USER_ID);
        Self::new(&base_url, user_id)
    }

    /// Replace the base URL, e.g. from a CLI override.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_url() {
        let config = ClientConfig::new("http://localhost:8000", "demo-user").unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(config.user_id, "demo-user");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = ClientConfig::new("not a url", "demo-user");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_with_base_url_override() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, DEFAULT_USER_ID)
            .unwrap()
            .with_base_url("http://shop.internal:9000")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://shop.internal:9000/");
    }
}
