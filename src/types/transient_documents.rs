//! Transient document models.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An upload request for the transient documents endpoint.
///
/// The file content is optional only so the validator can report
/// `NO_FILE_CONTENT`; a well-formed request always carries content. When
/// `mime_type` is absent it is derived from the file name extension.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// File content.
    pub file: Option<Bytes>,
    /// File name, including extension where available.
    pub file_name: String,
    /// Explicit media type. Empty is treated as absent.
    pub mime_type: Option<String>,
}

impl UploadRequest {
    /// Creates an upload request from a file name and its content.
    pub fn new(file_name: impl Into<String>, file: impl Into<Bytes>) -> Self {
        Self {
            file: Some(file.into()),
            file_name: file_name.into(),
            mime_type: None,
        }
    }

    /// Sets an explicit media type.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Response of the transient document upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransientDocumentResponse {
    /// Identifier of the uploaded document, valid for a short window.
    pub transient_document_id: String,
}
