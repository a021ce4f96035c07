//! Interception port
//!
//! Calls dispatched to the hosted service can be wrapped by interceptors.
//! An interceptor receives an [`Invocation`] describing the call and a
//! one-shot continuation; calling [`Invocation::proceed`] lets the call
//! reach the next interceptor (or the service itself). `proceed` consumes
//! the invocation, so an interceptor can forward a call at most once, and
//! whatever it returns is what the caller observes.

use crate::error::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;

/// A single dispatched call, as seen by an interceptor
pub struct Invocation<'a> {
    operation: &'a str,
    arguments: &'a Value,
    next: BoxFuture<'a, Result<Value>>,
}

impl<'a> Invocation<'a> {
    /// Create an invocation descriptor with its continuation
    pub fn new(operation: &'a str, arguments: &'a Value, next: BoxFuture<'a, Result<Value>>) -> Self {
        Self {
            operation,
            arguments,
            next,
        }
    }

    /// Name of the operation being invoked
    pub fn operation(&self) -> &str {
        self.operation
    }

    /// Arguments of the operation being invoked
    pub fn arguments(&self) -> &Value {
        self.arguments
    }

    /// Let the call proceed to the real target
    ///
    /// Consumes the invocation; the result (or failure) of the wrapped
    /// call is returned unchanged.
    pub async fn proceed(self) -> Result<Value> {
        self.next.await
    }
}

impl std::fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("operation", &self.operation)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Wraps every call dispatched to the hosted service
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Observe the invocation and forward it by calling
    /// [`Invocation::proceed`] exactly once.
    async fn intercept(&self, invocation: Invocation<'_>) -> Result<Value>;
}
