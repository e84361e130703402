//! Adobe Sign Integration Module
//!
//! This module provides a typed, testable client for the Adobe Sign REST API.
//! Every API method validates its parameters locally, builds the HTTP request,
//! dispatches it through a pluggable transport, and maps the response into a
//! typed model. All failures share one error shape with a stable
//! machine-readable code.
//!
//! # Features
//!
//! - **Agreements**: fetch form data (raw CSV bytes), get info, list, create
//! - **Transient Documents**: `multipart/form-data` file upload with MIME
//!   derivation from the file extension
//! - **Widgets**: fetch widget info, list, create
//! - **Validation**: local parameter checks with stable error codes, applied
//!   before any network call
//! - **Test support**: mock transport, retry harness for flaky live networks,
//!   and a fixture resolver that looks up or creates live resources by name
//!
//! # Example
//!
//! ```no_run
//! use integrations_adobe_sign::{RequestHeaders, SignClient, SignConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SignConfig::builder().build()?;
//! let client = SignClient::new(config)?;
//!
//! let headers = RequestHeaders::new("access-token").with_api_user("me@example.com");
//! let info = client.widgets().widget_info(&headers, "widget-id").await?;
//! println!("{}: {:?}", info.widget_id, info.status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod mocks;
pub mod resilience;
pub mod services;
pub mod transport;
pub mod types;
pub mod validator;

// Re-exports for convenience
pub use auth::RequestHeaders;
pub use client::SignClient;
pub use config::{SignConfig, SignConfigBuilder};
pub use errors::{ApiError, ApiErrorCode, SignError, SignResult};
pub use types::{TransientDocumentResponse, UploadRequest, WidgetInfo};

/// Prelude module with commonly used types and traits.
///
/// ```no_run
/// use integrations_adobe_sign::prelude::*;
/// ```
pub mod prelude {
    // Client
    pub use crate::client::SignClient;

    // Configuration
    pub use crate::config::{SignConfig, SignConfigBuilder};

    // Credential headers
    pub use crate::auth::RequestHeaders;

    // Services
    pub use crate::services::{AgreementsService, TransientDocumentsService, WidgetsService};

    // Common types
    pub use crate::types::{
        AgreementCreationRequest, AgreementCreationResponse, AgreementInfo, AgreementList,
        TransientDocumentResponse, UploadRequest, UserAgreement, UserWidget, WidgetCreationRequest,
        WidgetCreationResponse, WidgetInfo, WidgetList,
    };

    // Errors
    pub use crate::errors::{ApiError, ApiErrorCode, SignError, SignResult};

    // Test harness
    pub use crate::fixtures::{FixtureResolver, SampleDocument};
    pub use crate::resilience::RetryHarness;
}
