//! Endpoint hosting and client transport for ophost
//!
//! Hosts the dispatcher assembled by the composition root behind an HTTP
//! endpoint, and provides the standard client proxy used to invoke it:
//!
//! - [`host`] - the rocket-based endpoint host and its running handle
//! - [`builder`] - explicit construction of the host from its parts
//! - [`transport`] - the wire envelope and the reqwest client proxy
//! - [`init`] - the `run` entry point used by the binary

pub mod builder;
pub mod constants;
pub mod host;
pub mod init;
pub mod transport;

pub use builder::{BuilderError, EndpointHostBuilder};
pub use host::{EndpointConfig, EndpointHost, RunningEndpoint, ServiceBehaviors};
pub use init::run;
pub use transport::client::OperationsClient;
