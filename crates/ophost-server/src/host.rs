//! Endpoint host
//!
//! Hosts the dispatcher behind an HTTP endpoint. The invoke route is
//! mounted at `{base_path}/{relative_path}`; when metadata publication
//! is enabled a descriptor route is additionally mounted at
//! `{base_path}`. Startup is eager: [`EndpointHost::start`] resolves
//! only once the listener is accepting connections or binding has
//! failed, and the returned [`RunningEndpoint`] owns teardown.

use crate::builder::{BuilderError, EndpointHostBuilder};
use crate::transport::types::{RpcRequest, RpcResponse};
use ophost_domain::error::{Error, Result};
use ophost_domain::value_objects::ServiceDescriptor;
use ophost_infrastructure::config::AppConfig;
use ophost_infrastructure::di::AppContext;
use ophost_infrastructure::interception::OperationDispatcher;
use rocket::fairing::AdHoc;
use rocket::serde::json::Json;
use rocket::{Build, Ignite, Rocket, State, get, post, routes};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Endpoint addressing and teardown configuration
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Base path of the endpoint (must start with `/`)
    pub base_path: String,
    /// Relative path the invoke route is mounted under
    pub relative_path: String,
    /// Seconds granted to in-flight requests on close (0 = immediate)
    pub close_grace_secs: u32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        let server = ophost_infrastructure::config::ServerConfig::default();
        Self {
            host: server.host,
            port: server.port,
            base_path: server.base_path,
            relative_path: server.relative_path,
            close_grace_secs: server.close_grace_secs,
        }
    }
}

impl EndpointConfig {
    /// Create config for localhost with the specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// Take addressing from application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            base_path: config.server.base_path.clone(),
            relative_path: config.server.relative_path.clone(),
            close_grace_secs: config.server.close_grace_secs,
        }
    }

    /// Mount point of the invoke route
    pub fn invoke_path(&self) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            self.relative_path
        )
    }

    /// Full URL of the invoke route
    pub fn invoke_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.invoke_path())
    }

    /// Full URL of the metadata route
    pub fn metadata_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.base_path)
    }
}

/// Optional behaviors attached to the endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceBehaviors {
    /// Serve the service descriptor at the base path
    pub publish_metadata: bool,
    /// Attach the full error chain to fault responses
    pub include_error_detail: bool,
}

impl ServiceBehaviors {
    /// Take behaviors from application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            publish_metadata: config.behaviors.publish_metadata,
            include_error_detail: config.behaviors.include_error_detail,
        }
    }
}

/// Shared state for the endpoint routes
#[derive(Clone)]
struct EndpointState {
    dispatcher: Arc<OperationDispatcher>,
    descriptor: ServiceDescriptor,
    include_error_detail: bool,
}

/// HTTP endpoint host for a dispatcher
pub struct EndpointHost {
    dispatcher: Arc<OperationDispatcher>,
    config: EndpointConfig,
    behaviors: ServiceBehaviors,
}

impl std::fmt::Debug for EndpointHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointHost")
            .field("config", &self.config)
            .field("behaviors", &self.behaviors)
            .finish_non_exhaustive()
    }
}

impl EndpointHost {
    /// Start building a host from its parts
    pub fn builder() -> EndpointHostBuilder {
        EndpointHostBuilder::new()
    }

    pub(crate) fn new(
        dispatcher: Arc<OperationDispatcher>,
        config: EndpointConfig,
        behaviors: ServiceBehaviors,
    ) -> Self {
        Self {
            dispatcher,
            config,
            behaviors,
        }
    }

    /// Build a host from a composed application context
    pub fn from_context(ctx: &AppContext) -> std::result::Result<Self, BuilderError> {
        Self::builder()
            .with_dispatcher(ctx.dispatcher())
            .with_config(EndpointConfig::from_app_config(&ctx.config))
            .with_behaviors(ServiceBehaviors::from_app_config(&ctx.config))
            .build()
    }

    /// The endpoint configuration this host binds with
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Build the rocket application
    fn rocket(&self) -> Rocket<Build> {
        let state = EndpointState {
            dispatcher: self.dispatcher.clone(),
            descriptor: self.dispatcher.descriptor(),
            include_error_detail: self.behaviors.include_error_detail,
        };

        let invoke_base = self.config.invoke_path();
        let mut rocket = rocket::build()
            .manage(state)
            .mount(invoke_base.as_str(), routes![invoke_operation]);

        if self.behaviors.publish_metadata {
            rocket = rocket.mount(self.config.base_path.as_str(), routes![service_metadata]);
        }

        rocket
    }

    /// Start the listener
    ///
    /// Resolves once the endpoint is accepting connections. Bind
    /// failures (address in use, most notably) resolve to
    /// `Error::Binding`; invalid addressing to `Error::Configuration`.
    pub async fn start(self) -> Result<RunningEndpoint> {
        if !self.config.base_path.starts_with('/') {
            return Err(Error::configuration(format!(
                "endpoint base path must start with '/': {}",
                self.config.base_path
            )));
        }

        let addr = format!("{}:{}", self.config.host, self.config.port);

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port))
            .merge(("shutdown.grace", self.config.close_grace_secs))
            .merge(("shutdown.mercy", self.config.close_grace_secs))
            // Teardown is owned by RunningEndpoint, not by a signal handler
            .merge(("ctrlc", false));

        let (ready_tx, mut ready_rx) = oneshot::channel::<()>();
        let rocket = self
            .rocket()
            .configure(figment)
            .attach(AdHoc::on_liftoff("endpoint-ready", move |_| {
                Box::pin(async move {
                    let _ = ready_tx.send(());
                })
            }));

        let ignited = rocket.ignite().await.map_err(|err| {
            Error::configuration(format!("invalid endpoint configuration for {addr}: {err}"))
        })?;

        let shutdown = ignited.shutdown();
        let mut launch = tokio::spawn(ignited.launch());

        tokio::select! {
            ready = &mut ready_rx => match ready {
                Ok(()) => {
                    info!(%addr, "endpoint listening");
                    Ok(RunningEndpoint {
                        shutdown,
                        handle: launch,
                        addr,
                    })
                }
                // The liftoff fairing never fired: binding failed
                Err(_) => Err(launch_failure(&addr, launch.await)),
            },
            result = &mut launch => Err(launch_failure(&addr, result)),
        }
    }
}

/// A started endpoint, owning deterministic teardown
#[derive(Debug)]
pub struct RunningEndpoint {
    shutdown: rocket::Shutdown,
    handle: JoinHandle<std::result::Result<Rocket<Ignite>, rocket::Error>>,
    addr: String,
}

impl RunningEndpoint {
    /// Address the endpoint is listening on
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Stop the listener and release the socket
    ///
    /// Resolves once the listener has fully shut down; the address is
    /// free for a subsequent bind afterwards.
    pub async fn stop(self) -> Result<()> {
        let Self {
            shutdown,
            handle,
            addr,
        } = self;

        shutdown.notify();

        match handle.await {
            Ok(Ok(_)) => {
                info!(%addr, "endpoint stopped");
                Ok(())
            }
            Ok(Err(err)) => Err(Error::internal(format!(
                "endpoint at {addr} failed during shutdown: {err}"
            ))),
            Err(err) => Err(Error::internal(format!(
                "endpoint task for {addr} failed: {err}"
            ))),
        }
    }
}

/// Map a finished launch task to a startup error
fn launch_failure(
    addr: &str,
    result: std::result::Result<std::result::Result<Rocket<Ignite>, rocket::Error>, tokio::task::JoinError>,
) -> Error {
    match result {
        Ok(Err(err)) => Error::binding(format!("failed to bind endpoint at {addr}: {err}")),
        Ok(Ok(_)) => Error::binding(format!("endpoint at {addr} exited before liftoff")),
        Err(err) => Error::internal(format!("endpoint task for {addr} failed: {err}")),
    }
}

/// Invoke a hosted operation
#[post("/", data = "<request>")]
async fn invoke_operation(
    request: Json<RpcRequest>,
    state: &State<EndpointState>,
) -> Json<RpcResponse> {
    let RpcRequest { method, params, id } = request.into_inner();
    let arguments = params.unwrap_or(Value::Null);

    match state.dispatcher.dispatch(&method, arguments).await {
        Ok(result) => Json(RpcResponse::success(id, result)),
        Err(err) => {
            warn!(operation = %method, error = %err, "operation dispatch failed");
            Json(RpcResponse::fault(id, &err, state.include_error_detail))
        }
    }
}

/// Serve the service descriptor
#[get("/")]
fn service_metadata(state: &State<EndpointState>) -> Json<ServiceDescriptor> {
    Json(state.descriptor.clone())
}
