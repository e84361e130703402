//! Live-service fixture helpers for integration tests.
//!
//! Integration tests need valid resource identifiers on the live service.
//! The resolver looks a resource up by its human-readable name and creates
//! it when absent, seeding creation with a sample document uploaded as a
//! transient document.

use crate::auth::RequestHeaders;
use crate::client::SignClient;
use crate::errors::SignResult;
use crate::types::{AgreementCreationRequest, UploadRequest, WidgetCreationRequest};
use bytes::Bytes;
use tracing::info;

/// A sample document used to seed created resources.
#[derive(Debug, Clone)]
pub struct SampleDocument {
    /// File name, including extension.
    pub file_name: String,
    /// File content.
    pub content: Bytes,
    /// Explicit media type; derived from the extension when absent.
    pub mime_type: Option<String>,
}

impl SampleDocument {
    /// Creates a sample document.
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    fn upload_request(&self) -> UploadRequest {
        let mut request = UploadRequest::new(self.file_name.clone(), self.content.clone());
        if let Some(mime) = &self.mime_type {
            request = request.mime_type(mime.clone());
        }
        request
    }
}

/// Resolves named resources on the live service, creating them when absent.
pub struct FixtureResolver<'a> {
    client: &'a SignClient,
    headers: RequestHeaders,
    sample: SampleDocument,
    signer_email: String,
}

impl<'a> FixtureResolver<'a> {
    /// Creates a resolver.
    ///
    /// `signer_email` is used as the recipient when an agreement has to be
    /// created.
    pub fn new(
        client: &'a SignClient,
        headers: RequestHeaders,
        sample: SampleDocument,
        signer_email: impl Into<String>,
    ) -> Self {
        Self {
            client,
            headers,
            sample,
            signer_email: signer_email.into(),
        }
    }

    /// Returns the identifier of the agreement with the given name, creating
    /// it when no agreement by that name exists.
    pub async fn agreement_id(&self, name: &str) -> SignResult<String> {
        let list = self.client.agreements().list(&self.headers).await?;

        if let Some(agreement) = list.user_agreement_list.iter().find(|a| a.name == name) {
            return Ok(agreement.agreement_id.clone());
        }

        info!(name, "agreement not found, creating");
        let document = self
            .client
            .transient_documents()
            .create(&self.headers, self.sample.upload_request())
            .await?;

        let request = AgreementCreationRequest::single_signer(
            name,
            document.transient_document_id,
            self.signer_email.clone(),
        );

        let created = self
            .client
            .agreements()
            .create(&self.headers, request)
            .await?;

        Ok(created.agreement_id)
    }

    /// Returns the identifier of the widget with the given name, creating it
    /// when no widget by that name exists.
    pub async fn widget_id(&self, name: &str) -> SignResult<String> {
        let list = self.client.widgets().list(&self.headers).await?;

        if let Some(widget) = list.user_widget_list.iter().find(|w| w.name == name) {
            return Ok(widget.widget_id.clone());
        }

        info!(name, "widget not found, creating");
        let document = self
            .client
            .transient_documents()
            .create(&self.headers, self.sample.upload_request())
            .await?;

        let request = WidgetCreationRequest::for_document(name, document.transient_document_id);

        let created = self.client.widgets().create(&self.headers, request).await?;

        Ok(created.widget_id)
    }
}
