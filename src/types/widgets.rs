//! Widget models.

use super::agreements::FileInfo;
use serde::{Deserialize, Serialize};

/// Detailed information about a single widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInfo {
    /// Unique widget identifier.
    pub widget_id: String,
    /// Display name of the widget.
    pub name: String,
    /// Current status, e.g. `ENABLED` or `DISABLED`.
    pub status: String,
    /// Hosted URL of the widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Embeddable javascript snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
    /// Identifier of the latest widget version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_version_id: Option<String>,
}

/// A single widget as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWidget {
    /// Unique widget identifier.
    pub widget_id: String,
    /// Display name of the widget.
    pub name: String,
    /// Current status.
    pub status: String,
    /// Hosted URL of the widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Response of the widget list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetList {
    /// Widgets visible to the caller.
    #[serde(default)]
    pub user_widget_list: Vec<UserWidget>,
}

/// Core payload for creating a widget from uploaded documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCreationInfo {
    /// Display name of the widget.
    pub name: String,
    /// Documents seeding the widget.
    pub file_infos: Vec<FileInfo>,
    /// Signature flow, e.g. `SENDER_SIGNATURE_NOT_REQUIRED`.
    pub signature_flow: String,
}

/// Request body of the widget creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCreationRequest {
    /// Widget definition.
    pub widget_creation_info: WidgetCreationInfo,
}

impl WidgetCreationRequest {
    /// Builds a minimal widget from one uploaded document.
    pub fn for_document(
        name: impl Into<String>,
        transient_document_id: impl Into<String>,
    ) -> Self {
        Self {
            widget_creation_info: WidgetCreationInfo {
                name: name.into(),
                file_infos: vec![FileInfo {
                    transient_document_id: transient_document_id.into(),
                }],
                signature_flow: "SENDER_SIGNATURE_NOT_REQUIRED".to_string(),
            },
        }
    }
}

/// Response of the widget creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCreationResponse {
    /// Identifier of the newly created widget.
    pub widget_id: String,
    /// Hosted URL of the widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Embeddable javascript snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_info_deserializes_camel_case() {
        let json = r#"{
            "widgetId": "3AAA-widget",
            "name": "Signup form",
            "status": "ENABLED",
            "url": "https://secure.echosign.com/public/hostedForm?wid=3AAA-widget"
        }"#;

        let info: WidgetInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.widget_id, "3AAA-widget");
        assert_eq!(info.status, "ENABLED");
        assert!(info.javascript.is_none());
    }

    #[test]
    fn test_widget_creation_shape() {
        let request = WidgetCreationRequest::for_document("Signup form", "3AAA-doc");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["widgetCreationInfo"]["name"], "Signup form");
        assert_eq!(
            json["widgetCreationInfo"]["fileInfos"][0]["transientDocumentId"],
            "3AAA-doc"
        );
    }
}
