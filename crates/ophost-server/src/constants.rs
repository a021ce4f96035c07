//! Server constants

/// JSON-RPC protocol version carried in response envelopes.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC error code: the requested method does not exist.
pub const JSONRPC_METHOD_NOT_FOUND: i32 = -32601;

/// JSON-RPC error code: internal error during invocation.
pub const JSONRPC_INTERNAL_ERROR: i32 = -32603;
