//! Integration tests for the retry harness wrapped around live-style calls.

use integrations_adobe_sign::errors::TransportError;
use integrations_adobe_sign::mocks::MockHttpTransport;
use integrations_adobe_sign::resilience::RetryHarness;
use integrations_adobe_sign::{ApiErrorCode, RequestHeaders, SignClient, SignConfig};
use std::sync::Arc;
use std::time::Duration;

const WIDGET_JSON: &str =
    r#"{"widgetId": "3AAA-widget", "name": "Signup form", "status": "ENABLED"}"#;

fn mock_client() -> (SignClient, Arc<MockHttpTransport>) {
    let transport = Arc::new(MockHttpTransport::new());
    let config = SignConfig::builder().build().unwrap();
    let client = SignClient::with_transport(config, transport.clone());
    (client, transport)
}

#[tokio::test]
async fn test_harness_retries_network_flake() {
    let (client, transport) = mock_client();
    transport.enqueue_error(TransportError::Network("connection reset".to_string()));
    transport.enqueue_json_response(200, WIDGET_JSON);

    let headers = RequestHeaders::new("test-token");
    let harness = RetryHarness::new(3).with_backoff(Duration::from_millis(1));

    let info = harness
        .execute(|| async { client.widgets().widget_info(&headers, "3AAA-widget").await })
        .await
        .unwrap();

    assert_eq!(info.widget_id, "3AAA-widget");
    // One flake, one success.
    transport.verify_request_count(2);
}

#[tokio::test]
async fn test_harness_does_not_retry_remote_api_error() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(
        404,
        r#"{"code": "INVALID_WIDGET_ID", "message": "The Widget ID specified is invalid"}"#,
    );

    let headers = RequestHeaders::new("test-token");
    let harness = RetryHarness::new(3).with_backoff(Duration::from_millis(1));

    let error = harness
        .execute(|| async { client.widgets().widget_info(&headers, "unknown-widget").await })
        .await
        .unwrap_err();

    assert_eq!(error.api_code(), Some(&ApiErrorCode::InvalidWidgetId));
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_harness_does_not_retry_validation_error() {
    let (client, transport) = mock_client();

    let headers = RequestHeaders::new("");
    let harness = RetryHarness::new(3).with_backoff(Duration::from_millis(1));

    let error = harness
        .execute(|| async { client.widgets().widget_info(&headers, "3AAA-widget").await })
        .await
        .unwrap_err();

    assert_eq!(error.api_code(), Some(&ApiErrorCode::InvalidAccessToken));
    transport.verify_request_count(0);
}
