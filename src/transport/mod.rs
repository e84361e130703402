//! HTTP transport layer for the Adobe Sign API.
//!
//! The transport performs a single attempt and returns the raw status,
//! headers, and body. It never retries; retry is a test-harness concern
//! because the live API gives no idempotency guarantees for POSTs.

use crate::errors::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use url::Url;

/// HTTP transport abstraction for testability.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends an HTTP request and receives a response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// HTTP request representation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: RequestBody,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET method.
    Get,
    /// POST method.
    Post,
    /// PUT method.
    Put,
    /// DELETE method.
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Request body variants.
#[derive(Clone)]
pub enum RequestBody {
    /// Empty body.
    Empty,
    /// JSON payload.
    Json(Bytes),
    /// Multipart form-data body for file uploads.
    FormData(FormDataBody),
}

impl RequestBody {
    /// Returns the encoded body bytes, if any.
    pub fn as_bytes(&self) -> Option<Bytes> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Json(bytes) => Some(bytes.clone()),
            RequestBody::FormData(form) => Some(form.to_bytes()),
        }
    }
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::Empty => write!(f, "Empty"),
            RequestBody::Json(bytes) => write!(f, "Json({} bytes)", bytes.len()),
            RequestBody::FormData(form) => write!(f, "FormData({} parts)", form.parts.len()),
        }
    }
}

/// A single part of a multipart form-data body.
#[derive(Debug, Clone)]
pub struct FormPart {
    /// Form field name.
    pub name: String,
    /// File name, for file parts.
    pub file_name: Option<String>,
    /// Content type of the part, for file parts.
    pub content_type: Option<String>,
    /// Part content.
    pub data: Bytes,
}

/// Multipart form-data body for file uploads.
#[derive(Debug, Clone)]
pub struct FormDataBody {
    parts: Vec<FormPart>,
    boundary: String,
}

impl FormDataBody {
    /// Creates an empty form-data body.
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            boundary: Self::generate_boundary(),
        }
    }

    fn generate_boundary() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        format!("---------------{}", timestamp)
    }

    /// Adds a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            file_name: None,
            content_type: None,
            data: Bytes::from(value.into()),
        });
        self
    }

    /// Adds a file field.
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Bytes,
    ) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            file_name: Some(file_name.into()),
            content_type: Some(content_type.into()),
            data,
        });
        self
    }

    /// The parts of this body.
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Encodes the body.
    pub fn to_bytes(&self) -> Bytes {
        let mut result = Vec::new();

        for part in &self.parts {
            result.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());

            match &part.file_name {
                Some(file_name) => {
                    result.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                            part.name, file_name
                        )
                        .as_bytes(),
                    );
                }
                None => {
                    result.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name)
                            .as_bytes(),
                    );
                }
            }

            if let Some(content_type) = &part.content_type {
                result.extend_from_slice(
                    format!("Content-Type: {}\r\n", content_type).as_bytes(),
                );
            }

            result.extend_from_slice(b"\r\n");
            result.extend_from_slice(&part.data);
            result.extend_from_slice(b"\r\n");
        }

        result.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());

        Bytes::from(result)
    }

    /// The `Content-Type` header value for this body.
    pub fn content_type_header(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

impl Default for FormDataBody {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP response representation.
#[derive(Debug)]
pub struct HttpResponse {
    /// Response status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }
}

/// Reqwest-based HTTP transport implementation.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new reqwest transport from an existing client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a transport with the given connection timeout.
    pub fn with_connect_timeout(connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Http(format!("Failed to create client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method: Method = request.method.into();
        let mut req = self.client.request(method, request.url.clone());

        for (key, value) in request.headers.iter() {
            req = req.header(key, value);
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        match request.body {
            RequestBody::Empty => {}
            RequestBody::Json(bytes) => {
                req = req.header(CONTENT_TYPE, "application/json");
                req = req.body(bytes);
            }
            RequestBody::FormData(form) => {
                req = req.header(CONTENT_TYPE, form.content_type_header());
                req = req.body(form.to_bytes());
            }
        }

        let response = req.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, headers, body))
    }
}
