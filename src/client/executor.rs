//! Request executor with header construction, dispatch, and error mapping.

use crate::auth::{RequestHeaders, ACCESS_TOKEN_HEADER, API_USER_HEADER};
use crate::config::SignConfig;
use crate::errors::{ApiError, ApiErrorCode, SignError, SignResult};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody};
use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Characters escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes a resource identifier for use as a path segment.
pub(crate) fn encode_segment(segment: &str) -> Cow<'_, str> {
    utf8_percent_encode(segment, PATH_SEGMENT).into()
}

/// Executes validated requests against the Adobe Sign API.
///
/// The executor attaches credential headers, joins paths onto the base URL,
/// dispatches through the transport, and maps non-2xx responses into
/// [`ApiError`] values carrying the service's machine-readable code.
pub struct RequestExecutor {
    config: SignConfig,
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    /// Creates a new request executor.
    pub fn new(config: SignConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Executes a request and deserializes the JSON response.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        headers: &RequestHeaders,
        body: RequestBody,
    ) -> SignResult<T> {
        let bytes = self.execute_raw(method, path, headers, body).await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            SignError::Deserialization(format!("Failed to deserialize response: {}", e))
        })
    }

    /// Executes a request and returns the raw response body.
    ///
    /// Binary endpoints use this directly; JSON parsing is bypassed on 2xx.
    pub async fn execute_raw(
        &self,
        method: HttpMethod,
        path: &str,
        headers: &RequestHeaders,
        body: RequestBody,
    ) -> SignResult<Bytes> {
        let url = self.build_url(path)?;
        let header_map = self.build_headers(headers)?;

        debug!(%url, ?method, "dispatching request");

        let request = HttpRequest {
            method,
            url,
            headers: header_map,
            body,
            timeout: Some(self.config.timeout),
        };

        let response = self.transport.send(request).await.map_err(SignError::from)?;

        if !response.status.is_success() {
            return Err(self.map_error_response(response));
        }

        Ok(response.body)
    }

    /// Joins a relative path onto the base URL.
    pub fn build_url(&self, path: &str) -> SignResult<Url> {
        self.config
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SignError::Configuration(format!("Invalid request path: {}", e)))
    }

    fn build_headers(&self, headers: &RequestHeaders) -> SignResult<HeaderMap> {
        let mut map = HeaderMap::new();

        if let Some(token) = headers.access_token() {
            map.insert(
                HeaderName::from_static("access-token"),
                HeaderValue::from_str(token).map_err(|_| {
                    SignError::Configuration(format!(
                        "{} header value contains invalid characters",
                        ACCESS_TOKEN_HEADER
                    ))
                })?,
            );
        }

        if let Some(user) = headers.api_user() {
            map.insert(
                HeaderName::from_static("x-api-user"),
                HeaderValue::from_str(user).map_err(|_| {
                    SignError::Configuration(format!(
                        "{} header value contains invalid characters",
                        API_USER_HEADER
                    ))
                })?,
            );
        }

        map.insert(
            USER_AGENT,
            HeaderValue::from_str(&self.config.user_agent).map_err(|_| {
                SignError::Configuration("User agent contains invalid characters".to_string())
            })?,
        );

        Ok(map)
    }

    /// Maps a non-2xx response into an [`ApiError`].
    ///
    /// The service reports errors as `{"code": "...", "message": "..."}`.
    /// An unparseable error body still yields an `ApiError` so callers get
    /// one uniform failure shape.
    fn map_error_response(&self, response: HttpResponse) -> SignError {
        #[derive(serde::Deserialize)]
        struct RemoteError {
            code: Option<String>,
            message: Option<String>,
        }

        let status = response.status.as_u16();
        let parsed: Option<RemoteError> = serde_json::from_slice(&response.body).ok();

        match parsed.and_then(|e| e.code.map(|code| (code, e.message))) {
            Some((code, message)) => {
                let code = ApiErrorCode::from_api_code(&code);
                let message = message.unwrap_or_else(|| code.default_message().to_string());
                warn!(status, code = %code, "request rejected by service");
                ApiError::remote(code, message, status).into()
            }
            None => {
                let message = format!(
                    "HTTP {}: {}",
                    status,
                    String::from_utf8_lossy(&response.body)
                );
                warn!(status, "request failed with unrecognized error payload");
                ApiError::remote(ApiErrorCode::Remote("UNKNOWN".to_string()), message, status)
                    .into()
            }
        }
    }
}
