//! Operation dispatcher
//!
//! The transport layer hands incoming calls to the dispatcher rather
//! than to the service directly. The dispatcher threads each call
//! through the attached interceptors (registration order, outermost
//! first) and routes the innermost continuation to the typed contract
//! method matching the operation name.

use futures::future::BoxFuture;
use ophost_domain::constants::{GET_VALUE_FROM_CONSTRUCTOR, SERVICE_NAME};
use ophost_domain::error::{Error, Result};
use ophost_domain::ports::{Interceptor, Invocation, OperationsService};
use ophost_domain::value_objects::{OperationDescriptor, ServiceDescriptor};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Routes named operations through interceptors to the service
pub struct OperationDispatcher {
    service: Arc<dyn OperationsService>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl OperationDispatcher {
    /// Create a dispatcher for a service with the given interceptors
    ///
    /// Interceptors run in the order given, each exactly once per call.
    /// An empty list dispatches straight to the service.
    pub fn new(service: Arc<dyn OperationsService>, interceptors: Vec<Arc<dyn Interceptor>>) -> Self {
        Self {
            service,
            interceptors,
        }
    }

    /// Number of attached interceptors
    pub fn interceptor_count(&self) -> usize {
        self.interceptors.len()
    }

    /// Describe the hosted service and its operations
    pub fn descriptor(&self) -> ServiceDescriptor {
        ServiceDescriptor::new(
            SERVICE_NAME,
            vec![OperationDescriptor::niladic(
                GET_VALUE_FROM_CONSTRUCTOR,
                "integer",
            )],
        )
    }

    /// Dispatch one named operation call
    pub async fn dispatch(&self, operation: &str, arguments: Value) -> Result<Value> {
        debug!(operation, "dispatching operation");
        self.invoke_chain(0, operation, &arguments).await
    }

    /// Build the interceptor chain from `index` inward
    fn invoke_chain<'a>(
        &'a self,
        index: usize,
        operation: &'a str,
        arguments: &'a Value,
    ) -> BoxFuture<'a, Result<Value>> {
        match self.interceptors.get(index) {
            Some(interceptor) => {
                let next = self.invoke_chain(index + 1, operation, arguments);
                let invocation = Invocation::new(operation, arguments, next);
                interceptor.intercept(invocation)
            }
            None => Box::pin(self.call_target(operation)),
        }
    }

    /// Route the call to the typed contract method
    async fn call_target(&self, operation: &str) -> Result<Value> {
        match operation {
            GET_VALUE_FROM_CONSTRUCTOR => {
                let value = self.service.get_value_from_constructor().await?;
                Ok(Value::from(value))
            }
            _ => Err(Error::operation_not_found(operation)),
        }
    }
}
