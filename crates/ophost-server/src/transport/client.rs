//! Client proxy
//!
//! A standard HTTP client implementing the service contract, so a caller
//! holding `dyn OperationsService` cannot tell it is talking over the
//! network. The proxy is a bare pass-through: no retry, no
//! circuit-breaking, faults and results mirror the remote outcome.

use crate::transport::types::{RpcRequest, RpcResponse};
use async_trait::async_trait;
use ophost_domain::constants::GET_VALUE_FROM_CONSTRUCTOR;
use ophost_domain::error::{Error, Result};
use ophost_domain::ports::OperationsService;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Typed client for the operations endpoint
pub struct OperationsClient {
    endpoint: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl OperationsClient {
    /// Create a client for the full endpoint URL
    ///
    /// # Arguments
    /// * `endpoint` - e.g. `http://localhost:8000/Operations.svc/Operations`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// The endpoint URL this client invokes
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke a no-argument operation and return its raw result
    async fn invoke(&self, method: &str) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest::call(method, id);

        debug!(operation = method, endpoint = %self.endpoint, "invoking remote operation");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|err| Error::network(format!("request to {} failed", self.endpoint), err))?;

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|err| {
                Error::network(format!("invalid response from {}", self.endpoint), err)
            })?;

        if let Some(fault) = envelope.error {
            let detail = fault.data.map(|data| match data {
                Value::String(detail) => detail,
                other => other.to_string(),
            });
            return Err(Error::remote(fault.message, detail));
        }

        envelope
            .result
            .ok_or_else(|| Error::internal("response carried neither result nor error"))
    }
}

#[async_trait]
impl OperationsService for OperationsClient {
    async fn get_value_from_constructor(&self) -> Result<i64> {
        let result = self.invoke(GET_VALUE_FROM_CONSTRUCTOR).await?;
        result
            .as_i64()
            .ok_or_else(|| Error::internal(format!("expected integer result, got {result}")))
    }
}
