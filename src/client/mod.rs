//! Adobe Sign API client implementation.

use crate::config::SignConfig;
use crate::errors::{SignError, SignResult};
use crate::services::{AgreementsService, TransientDocumentsService, WidgetsService};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

mod executor;
pub use executor::RequestExecutor;
pub(crate) use executor::encode_segment;

/// Adobe Sign API client.
///
/// The main entry point for interacting with the Adobe Sign API. Holds the
/// immutable configuration and the transport; credential headers travel with
/// each call as [`RequestHeaders`](crate::auth::RequestHeaders).
pub struct SignClient {
    config: SignConfig,
    executor: Arc<RequestExecutor>,
}

impl SignClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use integrations_adobe_sign::{SignClient, SignConfig};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SignConfig::builder().build()?;
    /// let client = SignClient::new(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: SignConfig) -> SignResult<Self> {
        config.validate()?;

        let transport = Arc::new(
            ReqwestTransport::with_connect_timeout(config.connect_timeout).map_err(|e| {
                SignError::Configuration(format!("Failed to create transport: {}", e))
            })?,
        );

        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client over an explicit transport.
    ///
    /// Used by tests to substitute a mock transport.
    pub fn with_transport(config: SignConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let executor = Arc::new(RequestExecutor::new(config.clone(), transport));
        Self { config, executor }
    }

    /// Creates a new client builder.
    pub fn builder() -> SignClientBuilder {
        SignClientBuilder::new()
    }

    /// Access the agreements service.
    pub fn agreements(&self) -> AgreementsService {
        AgreementsService::new(self.executor.clone())
    }

    /// Access the transient documents service.
    pub fn transient_documents(&self) -> TransientDocumentsService {
        TransientDocumentsService::new(self.executor.clone())
    }

    /// Access the widgets service.
    pub fn widgets(&self) -> WidgetsService {
        WidgetsService::new(self.executor.clone())
    }

    /// The base URL for the API.
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    /// The client configuration.
    pub fn config(&self) -> &SignConfig {
        &self.config
    }
}

/// Builder for [`SignClient`].
pub struct SignClientBuilder {
    config_builder: crate::config::SignConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl SignClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: SignConfig::builder(),
            transport: None,
        }
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.connect_timeout(timeout);
        self
    }

    /// Sets the user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Sets an explicit transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> SignResult<SignClient> {
        let config = self.config_builder.build()?;
        match self.transport {
            Some(transport) => Ok(SignClient::with_transport(config, transport)),
            None => SignClient::new(config),
        }
    }
}

impl Default for SignClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
