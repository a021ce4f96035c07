//! Infrastructure layer for ophost
//!
//! Cross-cutting technical concerns and the concrete pieces the endpoint
//! host is assembled from:
//!
//! - [`config`] - figment-based configuration (defaults, TOML file, env)
//! - [`logging`] - tracing subscriber setup
//! - [`service`] - the constructor-injected service implementation
//! - [`interception`] - call recorder, recording interceptor, dispatcher
//! - [`di`] - the dill catalog composition root and [`di::AppContext`]

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod interception;
pub mod logging;
pub mod service;
