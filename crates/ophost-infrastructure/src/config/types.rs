//! Configuration types

use crate::constants::{DEFAULT_BASE_PATH, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RELATIVE_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener and endpoint addressing
    pub server: ServerConfig,
    /// Hosted service construction
    pub service: ServiceConfig,
    /// Optional endpoint behaviors
    pub behaviors: BehaviorConfig,
    /// Call interception
    pub interception: InterceptionConfig,
    /// Logging output
    pub logging: LoggingConfig,
}

/// Listener and endpoint addressing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base path of the endpoint (must start with `/`)
    pub base_path: String,
    /// Relative path the operation route is mounted under
    pub relative_path: String,
    /// Seconds to wait for in-flight requests when closing (0 = immediate)
    pub close_grace_secs: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            relative_path: DEFAULT_RELATIVE_PATH.to_string(),
            close_grace_secs: 0,
        }
    }
}

/// Hosted service construction
///
/// `value` is the constructor argument of the service implementation.
/// There is no default: composition fails when it is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// The integer the service is constructed with
    pub value: Option<i64>,
}

/// Optional endpoint behaviors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Serve a service descriptor at the base path
    pub publish_metadata: bool,
    /// Include full error detail in fault responses
    pub include_error_detail: bool,
}

/// Call interception
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptionConfig {
    /// Attach the recording interceptor to dispatched calls
    pub enabled: bool,
}

/// Logging output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json_format: bool,
    /// Optional file to also write logs to
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
