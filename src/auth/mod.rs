//! Per-call credential headers for the Adobe Sign API.
//!
//! Adobe Sign authenticates each call with an opaque `Access-Token` header,
//! optionally acting on behalf of another account member via `x-api-user`.
//! Both travel with the request rather than the client, so the same client
//! can serve multiple identities.

use crate::errors::{SignError, SignResult};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Wire name of the access token header.
pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";

/// Wire name of the api-user header.
pub const API_USER_HEADER: &str = "x-api-user";

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "ADOBE_SIGN_ACCESS_TOKEN";

/// Environment variable holding the api-user identifier.
pub const API_USER_ENV: &str = "ADOBE_SIGN_API_USER";

/// Credential headers attached to every API call.
///
/// The default value carries no access token at all, which the validator
/// reports as `NO_ACCESS_TOKEN_HEADER`; an explicitly empty token is
/// `INVALID_ACCESS_TOKEN`.
#[derive(Clone, Default)]
pub struct RequestHeaders {
    access_token: Option<SecretString>,
    api_user: Option<String>,
}

impl RequestHeaders {
    /// Creates headers with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(SecretString::new(access_token.into())),
            api_user: None,
        }
    }

    /// Sets the `x-api-user` header value.
    pub fn with_api_user(mut self, api_user: impl Into<String>) -> Self {
        self.api_user = Some(api_user.into());
        self
    }

    /// Resolves credentials from the environment.
    ///
    /// `ADOBE_SIGN_ACCESS_TOKEN` is required; `ADOBE_SIGN_API_USER` is
    /// attached when present.
    pub fn from_env() -> SignResult<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV).map_err(|_| {
            SignError::Configuration(format!("{} must be set", ACCESS_TOKEN_ENV))
        })?;

        let mut headers = Self::new(token);
        if let Ok(user) = std::env::var(API_USER_ENV) {
            headers = headers.with_api_user(user);
        }
        Ok(headers)
    }

    /// The access token, if one was provided.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(|t| t.expose_secret().as_str())
    }

    /// The `x-api-user` value, if one was provided.
    pub fn api_user(&self) -> Option<&str> {
        self.api_user.as_deref()
    }
}

impl fmt::Debug for RequestHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHeaders")
            .field("access_token", &self.access_token.as_ref().map(|_| "[redacted]"))
            .field("api_user", &self.api_user)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_token() {
        let headers = RequestHeaders::default();
        assert_eq!(headers.access_token(), None);
        assert_eq!(headers.api_user(), None);
    }

    #[test]
    fn test_empty_token_is_present() {
        let headers = RequestHeaders::new("");
        assert_eq!(headers.access_token(), Some(""));
    }

    #[test]
    fn test_debug_redacts_token() {
        let headers = RequestHeaders::new("top-secret").with_api_user("me@example.com");
        let rendered = format!("{:?}", headers);
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("me@example.com"));
    }
}
