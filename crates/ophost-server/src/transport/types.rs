//! Transport layer types
//!
//! JSON-RPC style envelope used on the wire between the endpoint host
//! and the client proxy.

use crate::constants::{JSONRPC_INTERNAL_ERROR, JSONRPC_METHOD_NOT_FOUND, JSONRPC_VERSION};
use ophost_domain::error::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload (JSON-RPC format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Name of the operation to invoke
    pub method: String,
    /// Operation arguments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Request ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl RpcRequest {
    /// Create a call request for a no-argument operation
    pub fn call(method: impl Into<String>, id: u64) -> Self {
        Self {
            method: method.into(),
            params: None,
            id: Some(Value::from(id)),
        }
    }
}

/// Response payload (JSON-RPC format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// JSON-RPC version
    pub jsonrpc: String,
    /// Response result (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Fault (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
    /// Request ID, echoed from the request
    pub id: Option<Value>,
}

/// Fault carried in a response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code
    pub code: i32,
    /// Error message (generic unless detail publication is enabled)
    pub message: String,
    /// Full error detail, present only when the endpoint publishes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Create a success response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create a fault response from a dispatch error
    ///
    /// The message stays generic; the full error chain is attached as
    /// `data` only when `include_detail` is set.
    pub fn fault(id: Option<Value>, error: &Error, include_detail: bool) -> Self {
        let (code, message) = match error {
            Error::OperationNotFound { operation } => (
                JSONRPC_METHOD_NOT_FOUND,
                format!("operation not found: {operation}"),
            ),
            _ => (
                JSONRPC_INTERNAL_ERROR,
                "operation invocation failed".to_string(),
            ),
        };

        let data = include_detail.then(|| Value::String(render_error_chain(error)));

        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(RpcError {
                code,
                message,
                data,
            }),
            id,
        }
    }
}

/// Render an error with its full source chain
fn render_error_chain(error: &Error) -> String {
    let mut rendered = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
