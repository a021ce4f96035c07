//! Transport layer
//!
//! The wire envelope shared by the endpoint and the client, and the
//! reqwest-based client proxy.

pub mod client;
pub mod types;

pub use client::OperationsClient;
pub use types::{RpcError, RpcRequest, RpcResponse};
