//! Error types for the Adobe Sign integration.

use std::fmt;
use thiserror::Error;

/// Result type for Adobe Sign operations.
pub type SignResult<T> = Result<T, SignError>;

/// Stable machine-readable error codes surfaced to callers.
///
/// The SDK enumerates the codes it can produce locally during validation.
/// Codes reported by the service that the SDK does not enumerate are carried
/// verbatim in the [`Remote`](ApiErrorCode::Remote) variant, so the same
/// canonical enumeration covers both local and remote failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// No access token was provided in the request headers.
    NoAccessTokenHeader,
    /// The access token provided is empty, invalid, or has expired.
    InvalidAccessToken,
    /// The `x-api-user` header value is empty or malformed.
    InvalidXApiUserHeader,
    /// The agreement identifier is missing or empty.
    InvalidAgreementId,
    /// The widget identifier is missing or empty.
    InvalidWidgetId,
    /// No file content was provided for an upload.
    NoFileContent,
    /// The upload file name is empty.
    NoFileName,
    /// No media type was provided and none could be derived from the file
    /// extension.
    NoMediaType,
    /// The file extension and the explicit media type disagree.
    UnsupportedMediaType,
    /// Code reported by the service for a non-2xx response.
    Remote(String),
}

impl ApiErrorCode {
    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &str {
        match self {
            ApiErrorCode::NoAccessTokenHeader => "NO_ACCESS_TOKEN_HEADER",
            ApiErrorCode::InvalidAccessToken => "INVALID_ACCESS_TOKEN",
            ApiErrorCode::InvalidXApiUserHeader => "INVALID_X_API_USER_HEADER",
            ApiErrorCode::InvalidAgreementId => "INVALID_AGREEMENT_ID",
            ApiErrorCode::InvalidWidgetId => "INVALID_WIDGET_ID",
            ApiErrorCode::NoFileContent => "NO_FILE_CONTENT",
            ApiErrorCode::NoFileName => "NO_FILE_NAME",
            ApiErrorCode::NoMediaType => "NO_MEDIA_TYPE",
            ApiErrorCode::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ApiErrorCode::Remote(code) => code,
        }
    }

    /// Parses a code string reported by the service into the canonical
    /// enumeration. Unknown codes are preserved as [`ApiErrorCode::Remote`].
    pub fn from_api_code(code: &str) -> Self {
        match code {
            "NO_ACCESS_TOKEN_HEADER" => ApiErrorCode::NoAccessTokenHeader,
            "INVALID_ACCESS_TOKEN" => ApiErrorCode::InvalidAccessToken,
            "INVALID_X_API_USER_HEADER" => ApiErrorCode::InvalidXApiUserHeader,
            "INVALID_AGREEMENT_ID" => ApiErrorCode::InvalidAgreementId,
            "INVALID_WIDGET_ID" => ApiErrorCode::InvalidWidgetId,
            "NO_FILE_CONTENT" => ApiErrorCode::NoFileContent,
            "NO_FILE_NAME" => ApiErrorCode::NoFileName,
            "NO_MEDIA_TYPE" => ApiErrorCode::NoMediaType,
            "UNSUPPORTED_MEDIA_TYPE" => ApiErrorCode::UnsupportedMediaType,
            other => ApiErrorCode::Remote(other.to_string()),
        }
    }

    /// Default human-readable message for locally produced codes.
    pub(crate) fn default_message(&self) -> &'static str {
        match self {
            ApiErrorCode::NoAccessTokenHeader => "Access token header not provided",
            ApiErrorCode::InvalidAccessToken => "Access token provided is invalid or has expired",
            ApiErrorCode::InvalidXApiUserHeader => {
                "Value provided in x-api-user header is in invalid format"
            }
            ApiErrorCode::InvalidAgreementId => "The agreement ID specified is invalid",
            ApiErrorCode::InvalidWidgetId => "The widget ID specified is invalid",
            ApiErrorCode::NoFileContent => "Must provide file content",
            ApiErrorCode::NoFileName => "Must provide file name",
            ApiErrorCode::NoMediaType => {
                "No media type provided and none could be derived from the file name"
            }
            ApiErrorCode::UnsupportedMediaType => {
                "The media type does not match the file extension"
            }
            ApiErrorCode::Remote(_) => "",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error shape shared by local validation failures and remote API errors.
///
/// Created only at the boundary: either by the request validator before any
/// network call (`http_status` is `None`), or by the response mapper from a
/// non-2xx response (`http_status` is the HTTP status).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Stable machine-readable code.
    pub code: ApiErrorCode,
    /// Human-readable message.
    pub message: String,
    /// HTTP status of the response, when the error came from the service.
    pub http_status: Option<u16>,
}

impl ApiError {
    /// Creates a local validation error. No network call was made.
    pub fn validation(code: ApiErrorCode) -> Self {
        let message = code.default_message().to_string();
        Self {
            code,
            message,
            http_status: None,
        }
    }

    /// Creates an error mapped from a service response.
    pub fn remote(code: ApiErrorCode, message: impl Into<String>, http_status: u16) -> Self {
        Self {
            code,
            message: message.into(),
            http_status: Some(http_status),
        }
    }

    /// True when this error was produced locally, before dispatch.
    pub fn is_local(&self) -> bool {
        self.http_status.is_none()
    }
}

/// Top-level error type for the Adobe Sign integration.
#[derive(Debug, Error)]
pub enum SignError {
    /// Validation or remote API error. Both share the [`ApiError`] shape so
    /// callers can branch on the code uniformly.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Connection-level network failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// A 2xx response carried a body that could not be deserialized.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Client construction or configuration failure.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SignError {
    /// Returns true if the error is a transport-level flake worth retrying.
    ///
    /// Validation and remote API errors are never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SignError::Network(_) | SignError::Timeout(_))
    }

    /// Returns the API error code, if this is an [`ApiError`].
    pub fn api_code(&self) -> Option<&ApiErrorCode> {
        match self {
            SignError::Api(err) => Some(&err.code),
            _ => None,
        }
    }

    /// Returns the HTTP status of the failing response, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            SignError::Api(err) => err.http_status,
            _ => None,
        }
    }
}

/// Transport errors, below the domain error mapping.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout error.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// HTTP protocol error.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Network(err.to_string())
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

impl From<TransportError> for SignError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(msg) => SignError::Timeout(msg),
            TransportError::Network(msg) => SignError::Network(msg),
            TransportError::Http(msg) => SignError::Network(msg),
        }
    }
}
