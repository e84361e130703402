//! Mock implementations for testing.
//!
//! Provides a scripted [`HttpTransport`] so the client can be exercised in
//! isolation: tests enqueue canned responses and assert on the recorded
//! requests. An empty request log after a failing call proves that
//! validation rejected the request before any dispatch.

use crate::errors::TransportError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock HTTP transport with scripted responses and request recording.
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a response for the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Enqueues a JSON response with the given status and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.enqueue_response(Ok(HttpResponse::new(
            StatusCode::from_u16(status).expect("invalid status code"),
            headers,
            Bytes::from(body.to_string()),
        )));
    }

    /// Enqueues a raw byte response with the given status and body.
    pub fn enqueue_bytes_response(&self, status: u16, body: &[u8]) {
        self.enqueue_response(Ok(HttpResponse::new(
            StatusCode::from_u16(status).expect("invalid status code"),
            HeaderMap::new(),
            Bytes::copy_from_slice(body),
        )));
    }

    /// Enqueues a transport-level error.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Returns all recorded requests.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the last recorded request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Asserts that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.requests.lock().unwrap().len();
        assert_eq!(
            actual, expected,
            "Expected {} requests, got {}",
            expected, actual
        );
    }

    /// Asserts the method and URL of the request at `index`.
    pub fn verify_request(&self, index: usize, method: HttpMethod, url_contains: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let request = &requests[index];
        assert_eq!(request.method, method, "Unexpected method");
        assert!(
            request.url.as_str().contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            request.url
        );
    }

    /// Asserts that the request at `index` carries the given header value.
    pub fn verify_header(&self, index: usize, name: &str, value: &str) {
        let requests = self.requests.lock().unwrap();
        assert!(index < requests.len(), "No request at index {}", index);

        let actual = requests[index]
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok());
        assert_eq!(
            actual,
            Some(value),
            "Expected header '{}' to be '{}', got {:?}",
            name,
            value,
            actual
        );
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Network(
                    "No response configured in MockHttpTransport".to_string(),
                ))
            })
    }
}
