//! Configuration
//!
//! Typed configuration structs plus the figment-based loader that merges
//! defaults, a TOML file, and `OPHOST__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, BehaviorConfig, InterceptionConfig, LoggingConfig, ServerConfig, ServiceConfig,
};
