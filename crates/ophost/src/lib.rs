//! ophost - dependency-injected service hosting with interception
//!
//! Hosts a constructor-injected operations service over an HTTP
//! endpoint. The application is assembled through a dill-based
//! composition root, calls can be wrapped by interceptors, and a
//! standard typed client invokes the endpoint over the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use ophost::config::AppConfig;
//! use ophost::di::init_app;
//! use ophost::server::{EndpointHost, OperationsClient};
//! use ophost::ports::OperationsService;
//!
//! let mut config = AppConfig::default();
//! config.service.value = Some(42);
//!
//! let ctx = init_app(config).await?;
//! let running = EndpointHost::from_context(&ctx)?.start().await?;
//!
//! let client = OperationsClient::new("http://localhost:8000/Operations.svc/Operations");
//! assert_eq!(client.get_value_from_constructor().await?, 42);
//!
//! running.stop().await?;
//! ```

pub use ophost_domain::{Error, Result, constants, error, ports, value_objects};
pub use ophost_infrastructure::{config, di, interception, logging, service};

/// Server layer: endpoint host, client proxy, and the run entry point
pub mod server {
    pub use ophost_server::{
        BuilderError, EndpointConfig, EndpointHost, EndpointHostBuilder, OperationsClient,
        RunningEndpoint, ServiceBehaviors, run, transport,
    };
}
