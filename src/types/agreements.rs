//! Agreement models.

use serde::{Deserialize, Serialize};

/// A single agreement as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAgreement {
    /// Unique agreement identifier.
    pub agreement_id: String,
    /// Display name of the agreement.
    pub name: String,
    /// Current status, e.g. `OUT_FOR_SIGNATURE` or `SIGNED`.
    pub status: String,
    /// Relevant date for display purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
    /// Whether this is an e-sign document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esign: Option<bool>,
}

/// Response of the agreement list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementList {
    /// Agreements visible to the caller.
    #[serde(default)]
    pub user_agreement_list: Vec<UserAgreement>,
}

/// Detailed information about a single agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementInfo {
    /// Unique agreement identifier.
    pub agreement_id: String,
    /// Display name of the agreement.
    pub name: String,
    /// Current status.
    pub status: String,
    /// Expiration timestamp, if the agreement expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    /// Locale the agreement was sent in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Reference to an uploaded transient document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Identifier returned by the transient document upload.
    pub transient_document_id: String,
}

/// A recipient of an agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientInfo {
    /// Recipient email address.
    pub email: String,
}

/// A set of recipients sharing one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientSetInfo {
    /// Members of the set.
    pub recipient_set_member_infos: Vec<RecipientInfo>,
    /// Role of the set, e.g. `SIGNER`.
    pub recipient_set_role: String,
}

/// Core payload for creating an agreement from uploaded documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCreationInfo {
    /// Documents seeding the agreement.
    pub file_infos: Vec<FileInfo>,
    /// Display name of the agreement.
    pub name: String,
    /// Recipients of the agreement.
    pub recipient_set_infos: Vec<RecipientSetInfo>,
    /// Signature type, e.g. `ESIGN`.
    pub signature_type: String,
    /// Signature flow, e.g. `SENDER_SIGNATURE_NOT_REQUIRED`.
    pub signature_flow: String,
}

/// Request body of the agreement creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementCreationRequest {
    /// Agreement definition.
    pub document_creation_info: DocumentCreationInfo,
}

impl AgreementCreationRequest {
    /// Builds a minimal single-signer e-sign agreement from one uploaded
    /// document.
    pub fn single_signer(
        name: impl Into<String>,
        transient_document_id: impl Into<String>,
        signer_email: impl Into<String>,
    ) -> Self {
        Self {
            document_creation_info: DocumentCreationInfo {
                file_infos: vec![FileInfo {
                    transient_document_id: transient_document_id.into(),
                }],
                name: name.into(),
                recipient_set_infos: vec![RecipientSetInfo {
                    recipient_set_member_infos: vec![RecipientInfo {
                        email: signer_email.into(),
                    }],
                    recipient_set_role: "SIGNER".to_string(),
                }],
                signature_type: "ESIGN".to_string(),
                signature_flow: "SENDER_SIGNATURE_NOT_REQUIRED".to_string(),
            },
        }
    }
}

/// Response of the agreement creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementCreationResponse {
    /// Identifier of the newly created agreement.
    pub agreement_id: String,
    /// Embeddable signing URL, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_signer_shape() {
        let request = AgreementCreationRequest::single_signer("NDA", "3AAA-doc", "a@b.com");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["documentCreationInfo"]["fileInfos"][0]["transientDocumentId"],
            "3AAA-doc"
        );
        assert_eq!(
            json["documentCreationInfo"]["recipientSetInfos"][0]["recipientSetRole"],
            "SIGNER"
        );
        assert_eq!(json["documentCreationInfo"]["signatureType"], "ESIGN");
    }

    #[test]
    fn test_agreement_list_defaults_empty() {
        let list: AgreementList = serde_json::from_str("{}").unwrap();
        assert!(list.user_agreement_list.is_empty());
    }
}
