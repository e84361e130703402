//! Local request validation.
//!
//! Pure functions over call parameters; nothing here touches the network.
//! Checks run in a fixed order and the first failure wins, so callers always
//! see the same code for the same malformed input.

use crate::auth::RequestHeaders;
use crate::errors::{ApiError, ApiErrorCode, SignResult};
use crate::types::UploadRequest;
use bytes::Bytes;
use std::path::Path;

/// The kind of server-side resource an identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A document-signing transaction.
    Agreement,
    /// An embeddable reusable signing form.
    Widget,
}

impl ResourceKind {
    fn invalid_id_code(self) -> ApiErrorCode {
        match self {
            ResourceKind::Agreement => ApiErrorCode::InvalidAgreementId,
            ResourceKind::Widget => ApiErrorCode::InvalidWidgetId,
        }
    }
}

/// Validates the credential headers.
///
/// A missing token is `NO_ACCESS_TOKEN_HEADER`, an empty token is
/// `INVALID_ACCESS_TOKEN`, and an empty `x-api-user` (when provided at all)
/// is `INVALID_X_API_USER_HEADER`.
pub fn validate_headers(headers: &RequestHeaders) -> SignResult<()> {
    match headers.access_token() {
        None => return Err(ApiError::validation(ApiErrorCode::NoAccessTokenHeader).into()),
        Some(token) if token.is_empty() => {
            return Err(ApiError::validation(ApiErrorCode::InvalidAccessToken).into())
        }
        Some(_) => {}
    }

    if let Some(user) = headers.api_user() {
        if user.is_empty() {
            return Err(ApiError::validation(ApiErrorCode::InvalidXApiUserHeader).into());
        }
    }

    Ok(())
}

/// Validates a resource identifier for the given resource kind.
pub fn validate_resource_id(id: &str, kind: ResourceKind) -> SignResult<()> {
    if id.is_empty() {
        return Err(ApiError::validation(kind.invalid_id_code()).into());
    }
    Ok(())
}

/// A validated upload descriptor, ready to be encoded as multipart form data.
#[derive(Debug, Clone)]
pub struct ResolvedUpload {
    /// File content.
    pub file: Bytes,
    /// File name as sent to the service.
    pub file_name: String,
    /// Resolved media type: the explicit one, or derived from the extension.
    pub mime_type: String,
}

/// Validates an upload request and resolves its media type.
///
/// When no explicit media type is given it is derived from the file
/// extension. A file with neither is `NO_MEDIA_TYPE`; an extension that
/// disagrees with the explicit media type is `UNSUPPORTED_MEDIA_TYPE`.
pub fn validate_upload(request: UploadRequest) -> SignResult<ResolvedUpload> {
    let file = match request.file {
        Some(file) => file,
        None => return Err(ApiError::validation(ApiErrorCode::NoFileContent).into()),
    };

    if request.file_name.is_empty() {
        return Err(ApiError::validation(ApiErrorCode::NoFileName).into());
    }

    let explicit = request
        .mime_type
        .as_deref()
        .filter(|mime| !mime.is_empty());

    let derived = Path::new(&request.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| mime_guess::from_ext(ext).first_raw());

    let mime_type = match (explicit, derived) {
        (None, None) => return Err(ApiError::validation(ApiErrorCode::NoMediaType).into()),
        (None, Some(derived)) => derived.to_string(),
        (Some(explicit), None) => explicit.to_string(),
        (Some(explicit), Some(derived)) => {
            if !explicit.eq_ignore_ascii_case(derived) {
                return Err(ApiError::validation(ApiErrorCode::UnsupportedMediaType).into());
            }
            explicit.to_string()
        }
    };

    Ok(ResolvedUpload {
        file,
        file_name: request.file_name,
        mime_type,
    })
}
