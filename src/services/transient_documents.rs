//! Transient documents service.

use crate::auth::RequestHeaders;
use crate::client::RequestExecutor;
use crate::errors::SignResult;
use crate::transport::{FormDataBody, HttpMethod, RequestBody};
use crate::types::{TransientDocumentResponse, UploadRequest};
use crate::validator;
use std::sync::Arc;
use tracing::debug;

/// Service for transient document uploads.
pub struct TransientDocumentsService {
    executor: Arc<RequestExecutor>,
}

impl TransientDocumentsService {
    /// Creates a new transient documents service.
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Uploads a file, producing a short-lived document reference that can
    /// seed an agreement or widget.
    ///
    /// Sent as `multipart/form-data` with `File-Name`, `Mime-Type`, and
    /// `File` fields. When the request carries no explicit media type it is
    /// derived from the file extension before dispatch.
    pub async fn create(
        &self,
        headers: &RequestHeaders,
        request: UploadRequest,
    ) -> SignResult<TransientDocumentResponse> {
        validator::validate_headers(headers)?;
        let upload = validator::validate_upload(request)?;

        debug!(
            file_name = %upload.file_name,
            mime_type = %upload.mime_type,
            size = upload.file.len(),
            "uploading transient document"
        );

        let form = FormDataBody::new()
            .text("File-Name", upload.file_name.clone())
            .text("Mime-Type", upload.mime_type.clone())
            .file("File", upload.file_name, upload.mime_type, upload.file);

        self.executor
            .execute_json(
                HttpMethod::Post,
                "transientDocuments",
                headers,
                RequestBody::FormData(form),
            )
            .await
    }
}
