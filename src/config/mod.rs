//! Configuration for the Adobe Sign client.

use crate::errors::{SignError, SignResult};
use std::time::Duration;
use url::Url;

/// Default base URL for the hosted Adobe Sign REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.na1.echosign.com/api/rest/v5/";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ADOBE_SIGN_BASE_URL";

/// Configuration for the Adobe Sign client.
///
/// Immutable once built. Construct with [`SignConfig::builder`] or resolve
/// from the environment with [`SignConfig::from_env`].
#[derive(Clone, Debug)]
pub struct SignConfig {
    /// Base URL for the API. Always ends with a trailing slash.
    pub base_url: Url,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl SignConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> SignConfigBuilder {
        SignConfigBuilder::new()
    }

    /// Resolves the configuration from the environment.
    ///
    /// Reads `ADOBE_SIGN_BASE_URL` when set, otherwise the hosted default.
    pub fn from_env() -> SignResult<Self> {
        let mut builder = Self::builder();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SignResult<()> {
        let scheme = self.base_url.scheme();
        let loopback = matches!(self.base_url.host_str(), Some("localhost" | "127.0.0.1"));

        // Plain http is allowed only for loopback test servers.
        if scheme != "https" && !(scheme == "http" && loopback) {
            return Err(SignError::Configuration(
                "Base URL must use HTTPS".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for [`SignConfig`].
pub struct SignConfigBuilder {
    base_url: Option<String>,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
}

impl SignConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: None,
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> SignResult<SignConfig> {
        let raw = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Normalize to a trailing slash so relative path joins keep the
        // API prefix intact.
        let normalized = if raw.ends_with('/') {
            raw
        } else {
            format!("{}/", raw)
        };

        let base_url = Url::parse(&normalized)
            .map_err(|e| SignError::Configuration(format!("Invalid base URL: {}", e)))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("integrations-adobe-sign/{}", env!("CARGO_PKG_VERSION")));

        let config = SignConfig {
            base_url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent,
        };

        config.validate()?;

        Ok(config)
    }
}

impl Default for SignConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignConfig::builder().build().unwrap();

        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.user_agent.starts_with("integrations-adobe-sign/"));
    }

    #[test]
    fn test_custom_config() {
        let config = SignConfig::builder()
            .base_url("https://api.eu1.echosign.com/api/rest/v5")
            .timeout(Duration::from_secs(30))
            .user_agent("test-agent/1.0")
            .build()
            .unwrap();

        assert_eq!(
            config.base_url.as_str(),
            "https://api.eu1.echosign.com/api/rest/v5/"
        );
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "test-agent/1.0");
    }

    #[test]
    fn test_rejects_plain_http() {
        let result = SignConfig::builder()
            .base_url("http://api.na1.echosign.com/api/rest/v5")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_allows_loopback_http() {
        let result = SignConfig::builder().base_url("http://127.0.0.1:8080").build();
        assert!(result.is_ok());
    }
}
