//! Per-resource services for the Adobe Sign API.
//!
//! Each service validates parameters locally before any dispatch, so
//! malformed calls fail with a stable error code and no network traffic.

mod agreements;
mod transient_documents;
mod widgets;

pub use agreements::AgreementsService;
pub use transient_documents::TransientDocumentsService;
pub use widgets::WidgetsService;
