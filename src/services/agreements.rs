//! Agreements service.

use crate::auth::RequestHeaders;
use crate::client::{encode_segment, RequestExecutor};
use crate::errors::{SignError, SignResult};
use crate::transport::{HttpMethod, RequestBody};
use crate::types::{AgreementCreationRequest, AgreementCreationResponse, AgreementInfo, AgreementList};
use crate::validator::{self, ResourceKind};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Service for agreement operations.
pub struct AgreementsService {
    executor: Arc<RequestExecutor>,
}

impl AgreementsService {
    /// Creates a new agreements service.
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Retrieves the form data of an agreement as raw bytes.
    ///
    /// The service returns CSV content; no JSON parsing is applied.
    pub async fn form_data(
        &self,
        headers: &RequestHeaders,
        agreement_id: &str,
    ) -> SignResult<Bytes> {
        validator::validate_headers(headers)?;
        validator::validate_resource_id(agreement_id, ResourceKind::Agreement)?;

        let path = format!("agreements/{}/formData", encode_segment(agreement_id));
        debug!(agreement_id, "fetching agreement form data");

        self.executor
            .execute_raw(HttpMethod::Get, &path, headers, RequestBody::Empty)
            .await
    }

    /// Retrieves detailed information about an agreement.
    pub async fn get(
        &self,
        headers: &RequestHeaders,
        agreement_id: &str,
    ) -> SignResult<AgreementInfo> {
        validator::validate_headers(headers)?;
        validator::validate_resource_id(agreement_id, ResourceKind::Agreement)?;

        let path = format!("agreements/{}", encode_segment(agreement_id));

        self.executor
            .execute_json(HttpMethod::Get, &path, headers, RequestBody::Empty)
            .await
    }

    /// Lists the agreements visible to the caller.
    pub async fn list(&self, headers: &RequestHeaders) -> SignResult<AgreementList> {
        validator::validate_headers(headers)?;

        self.executor
            .execute_json(HttpMethod::Get, "agreements", headers, RequestBody::Empty)
            .await
    }

    /// Creates an agreement from previously uploaded transient documents.
    pub async fn create(
        &self,
        headers: &RequestHeaders,
        request: AgreementCreationRequest,
    ) -> SignResult<AgreementCreationResponse> {
        validator::validate_headers(headers)?;

        let body = serde_json::to_vec(&request).map_err(|e| {
            SignError::Configuration(format!("Failed to serialize request: {}", e))
        })?;

        debug!(name = %request.document_creation_info.name, "creating agreement");

        self.executor
            .execute_json(
                HttpMethod::Post,
                "agreements",
                headers,
                RequestBody::Json(Bytes::from(body)),
            )
            .await
    }
}
