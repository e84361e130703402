//! Widgets service.

use crate::auth::RequestHeaders;
use crate::client::{encode_segment, RequestExecutor};
use crate::errors::{SignError, SignResult};
use crate::transport::{HttpMethod, RequestBody};
use crate::types::{WidgetCreationRequest, WidgetCreationResponse, WidgetInfo, WidgetList};
use crate::validator::{self, ResourceKind};
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Service for widget operations.
pub struct WidgetsService {
    executor: Arc<RequestExecutor>,
}

impl WidgetsService {
    /// Creates a new widgets service.
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Retrieves the details of a widget.
    pub async fn widget_info(
        &self,
        headers: &RequestHeaders,
        widget_id: &str,
    ) -> SignResult<WidgetInfo> {
        validator::validate_headers(headers)?;
        validator::validate_resource_id(widget_id, ResourceKind::Widget)?;

        let path = format!("widgets/{}", encode_segment(widget_id));
        debug!(widget_id, "fetching widget info");

        self.executor
            .execute_json(HttpMethod::Get, &path, headers, RequestBody::Empty)
            .await
    }

    /// Lists the widgets visible to the caller.
    pub async fn list(&self, headers: &RequestHeaders) -> SignResult<WidgetList> {
        validator::validate_headers(headers)?;

        self.executor
            .execute_json(HttpMethod::Get, "widgets", headers, RequestBody::Empty)
            .await
    }

    /// Creates a widget from previously uploaded transient documents.
    pub async fn create(
        &self,
        headers: &RequestHeaders,
        request: WidgetCreationRequest,
    ) -> SignResult<WidgetCreationResponse> {
        validator::validate_headers(headers)?;

        let body = serde_json::to_vec(&request).map_err(|e| {
            SignError::Configuration(format!("Failed to serialize request: {}", e))
        })?;

        debug!(name = %request.widget_creation_info.name, "creating widget");

        self.executor
            .execute_json(
                HttpMethod::Post,
                "widgets",
                headers,
                RequestBody::Json(Bytes::from(body)),
            )
            .await
    }
}
