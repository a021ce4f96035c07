//! Endpoint host builder
//!
//! Builder pattern for constructing the endpoint host with dependency
//! injection. Ensures the dispatch pipeline is provided before the host
//! is constructed.

use crate::host::{EndpointConfig, EndpointHost, ServiceBehaviors};
use ophost_infrastructure::interception::OperationDispatcher;
use std::sync::Arc;

/// Builder for the endpoint host
///
/// Addressing and behaviors have sensible defaults; the dispatcher does
/// not, and omitting it is a composition error.
#[derive(Default)]
pub struct EndpointHostBuilder {
    dispatcher: Option<Arc<OperationDispatcher>>,
    config: Option<EndpointConfig>,
    behaviors: ServiceBehaviors,
}

impl EndpointHostBuilder {
    /// Create a new host builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dispatch pipeline incoming calls are routed through
    pub fn with_dispatcher(mut self, dispatcher: Arc<OperationDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Set the endpoint addressing configuration
    pub fn with_config(mut self, config: EndpointConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the optional endpoint behaviors
    pub fn with_behaviors(mut self, behaviors: ServiceBehaviors) -> Self {
        self.behaviors = behaviors;
        self
    }

    /// Build the endpoint host
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the dispatcher was
    /// not provided.
    pub fn build(self) -> Result<EndpointHost, BuilderError> {
        let dispatcher = self
            .dispatcher
            .ok_or(BuilderError::MissingDependency("operation dispatcher"))?;
        let config = self.config.unwrap_or_default();

        Ok(EndpointHost::new(dispatcher, config, self.behaviors))
    }
}

/// Errors that can occur during host building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
