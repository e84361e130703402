//! Integration tests for the agreements service.

use integrations_adobe_sign::mocks::MockHttpTransport;
use integrations_adobe_sign::transport::HttpMethod;
use integrations_adobe_sign::{ApiErrorCode, RequestHeaders, SignClient, SignConfig, SignError};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const FORM_DATA_CSV: &[u8] =
    b"\"completed\",\"email\",\"role\"\n\"2016-05-02\",\"signer@example.com\",\"SIGNER\"\n";

fn mock_client() -> (SignClient, Arc<MockHttpTransport>) {
    let transport = Arc::new(MockHttpTransport::new());
    let config = SignConfig::builder().build().unwrap();
    let client = SignClient::with_transport(config, transport.clone());
    (client, transport)
}

fn valid_headers() -> RequestHeaders {
    RequestHeaders::new("test-token").with_api_user("me@example.com")
}

fn api_code(error: SignError) -> ApiErrorCode {
    match error {
        SignError::Api(err) => err.code,
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_access_token() {
    let (client, transport) = mock_client();

    let result = client
        .agreements()
        .form_data(&RequestHeaders::default(), "3AAA-agr")
        .await;

    assert_eq!(
        api_code(result.unwrap_err()),
        ApiErrorCode::NoAccessTokenHeader
    );
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_empty_access_token() {
    let (client, transport) = mock_client();

    let result = client
        .agreements()
        .form_data(&RequestHeaders::new(""), "3AAA-agr")
        .await;

    assert_eq!(
        api_code(result.unwrap_err()),
        ApiErrorCode::InvalidAccessToken
    );
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_empty_api_user() {
    let (client, transport) = mock_client();
    let headers = RequestHeaders::new("test-token").with_api_user("");

    let result = client.agreements().form_data(&headers, "3AAA-agr").await;

    assert_eq!(
        api_code(result.unwrap_err()),
        ApiErrorCode::InvalidXApiUserHeader
    );
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_empty_agreement_id() {
    let (client, transport) = mock_client();

    let result = client.agreements().form_data(&valid_headers(), "").await;

    assert_eq!(
        api_code(result.unwrap_err()),
        ApiErrorCode::InvalidAgreementId
    );
    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_form_data_returns_raw_bytes() {
    let (client, transport) = mock_client();
    transport.enqueue_bytes_response(200, FORM_DATA_CSV);

    let bytes = client
        .agreements()
        .form_data(&valid_headers(), "3AAA-agr")
        .await
        .unwrap();

    assert_eq!(bytes.as_ref(), FORM_DATA_CSV);
    transport.verify_request_count(1);
    transport.verify_request(0, HttpMethod::Get, "agreements/3AAA-agr/formData");
}

#[tokio::test]
async fn test_remote_error_maps_code_and_status() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(
        404,
        r#"{"code": "INVALID_AGREEMENT_ID", "message": "The Agreement ID specified is invalid"}"#,
    );

    let error = client
        .agreements()
        .form_data(&valid_headers(), "unknown-id")
        .await
        .unwrap_err();

    match error {
        SignError::Api(err) => {
            assert_eq!(err.code, ApiErrorCode::InvalidAgreementId);
            assert_eq!(err.http_status, Some(404));
            assert!(!err.is_local());
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remote_error_with_unknown_code() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(
        403,
        r#"{"code": "AGREEMENT_NOT_VISIBLE", "message": "No access"}"#,
    );

    let error = client
        .agreements()
        .form_data(&valid_headers(), "3AAA-agr")
        .await
        .unwrap_err();

    assert_eq!(
        error.api_code(),
        Some(&ApiErrorCode::Remote("AGREEMENT_NOT_VISIBLE".to_string()))
    );
    assert_eq!(error.http_status(), Some(403));
}

#[tokio::test]
async fn test_remote_error_with_unparseable_body() {
    let (client, transport) = mock_client();
    transport.enqueue_bytes_response(502, b"<html>Bad Gateway</html>");

    let error = client
        .agreements()
        .form_data(&valid_headers(), "3AAA-agr")
        .await
        .unwrap_err();

    assert_eq!(
        error.api_code(),
        Some(&ApiErrorCode::Remote("UNKNOWN".to_string()))
    );
    assert_eq!(error.http_status(), Some(502));
}

#[tokio::test]
async fn test_get_agreement_info() {
    let (client, transport) = mock_client();
    transport.enqueue_json_response(
        200,
        r#"{"agreementId": "3AAA-agr", "name": "NDA", "status": "OUT_FOR_SIGNATURE"}"#,
    );

    let info = client
        .agreements()
        .get(&valid_headers(), "3AAA-agr")
        .await
        .unwrap();

    assert_eq!(info.agreement_id, "3AAA-agr");
    assert_eq!(info.status, "OUT_FOR_SIGNATURE");
}

#[tokio::test]
async fn test_create_agreement_posts_json() {
    use integrations_adobe_sign::types::AgreementCreationRequest;

    let (client, transport) = mock_client();
    transport.enqueue_json_response(200, r#"{"agreementId": "3AAA-new"}"#);

    let request = AgreementCreationRequest::single_signer("NDA", "3AAA-doc", "signer@example.com");
    let created = client
        .agreements()
        .create(&valid_headers(), request)
        .await
        .unwrap();

    assert_eq!(created.agreement_id, "3AAA-new");

    transport.verify_request(0, HttpMethod::Post, "agreements");
    let body = transport.last_request().unwrap().body.as_bytes().unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["documentCreationInfo"]["name"], "NDA");
}
