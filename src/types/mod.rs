//! Typed request and response models for the Adobe Sign API.
//!
//! Wire names are camelCase; each endpoint gets an explicit request/response
//! struct rather than positional parameters.

mod agreements;
mod transient_documents;
mod widgets;

pub use agreements::{
    AgreementCreationRequest, AgreementCreationResponse, AgreementInfo, AgreementList,
    DocumentCreationInfo, FileInfo, RecipientInfo, RecipientSetInfo, UserAgreement,
};
pub use transient_documents::{TransientDocumentResponse, UploadRequest};
pub use widgets::{
    UserWidget, WidgetCreationInfo, WidgetCreationRequest, WidgetCreationResponse, WidgetInfo,
    WidgetList,
};
