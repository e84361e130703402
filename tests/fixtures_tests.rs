//! Integration tests for the fixture resolver.

use integrations_adobe_sign::fixtures::{FixtureResolver, SampleDocument};
use integrations_adobe_sign::mocks::MockHttpTransport;
use integrations_adobe_sign::transport::HttpMethod;
use integrations_adobe_sign::{RequestHeaders, SignClient, SignConfig};
use std::sync::Arc;

fn mock_client() -> (SignClient, Arc<MockHttpTransport>) {
    let transport = Arc::new(MockHttpTransport::new());
    let config = SignConfig::builder().build().unwrap();
    let client = SignClient::with_transport(config, transport.clone());
    (client, transport)
}

fn sample() -> SampleDocument {
    SampleDocument::new("sample.pdf", b"%PDF-1.4 sample".as_slice())
}

#[tokio::test]
async fn test_resolves_existing_agreement_by_name() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(
        200,
        r#"{
            "userAgreementList": [
                {"agreementId": "3AAA-a1", "name": "Other", "status": "SIGNED"},
                {"agreementId": "3AAA-a2", "name": "NDA", "status": "OUT_FOR_SIGNATURE"}
            ]
        }"#,
    );

    let resolver = FixtureResolver::new(
        &client,
        RequestHeaders::new("test-token"),
        sample(),
        "signer@example.com",
    );

    let id = resolver.agreement_id("NDA").await.unwrap();

    assert_eq!(id, "3AAA-a2");
    // Lookup only; nothing was created.
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_creates_agreement_when_absent() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(200, r#"{"userAgreementList": []}"#);
    transport.enqueue_json_response(200, r#"{"transientDocumentId": "3AAA-doc"}"#);
    transport.enqueue_json_response(200, r#"{"agreementId": "3AAA-created"}"#);

    let resolver = FixtureResolver::new(
        &client,
        RequestHeaders::new("test-token"),
        sample(),
        "signer@example.com",
    );

    let id = resolver.agreement_id("NDA").await.unwrap();

    assert_eq!(id, "3AAA-created");
    transport.verify_request_count(3);
    transport.verify_request(0, HttpMethod::Get, "agreements");
    transport.verify_request(1, HttpMethod::Post, "transientDocuments");
    transport.verify_request(2, HttpMethod::Post, "agreements");
}

#[tokio::test]
async fn test_resolves_existing_widget_by_name() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(
        200,
        r#"{
            "userWidgetList": [
                {"widgetId": "3AAA-w1", "name": "Signup form", "status": "ENABLED"}
            ]
        }"#,
    );

    let resolver = FixtureResolver::new(
        &client,
        RequestHeaders::new("test-token"),
        sample(),
        "signer@example.com",
    );

    let id = resolver.widget_id("Signup form").await.unwrap();

    assert_eq!(id, "3AAA-w1");
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_creates_widget_when_absent() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(200, r#"{"userWidgetList": []}"#);
    transport.enqueue_json_response(200, r#"{"transientDocumentId": "3AAA-doc"}"#);
    transport.enqueue_json_response(200, r#"{"widgetId": "3AAA-new-widget"}"#);

    let resolver = FixtureResolver::new(
        &client,
        RequestHeaders::new("test-token"),
        sample(),
        "signer@example.com",
    );

    let id = resolver.widget_id("Signup form").await.unwrap();

    assert_eq!(id, "3AAA-new-widget");
    transport.verify_request_count(3);
    transport.verify_request(1, HttpMethod::Post, "transientDocuments");
    transport.verify_request(2, HttpMethod::Post, "widgets");
}
