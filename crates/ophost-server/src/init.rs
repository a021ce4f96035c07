//! Server initialization
//!
//! Startup sequence for the binary: configuration loading, logging,
//! composition, hosting, and graceful shutdown on ctrl-c.

use crate::host::EndpointHost;
use ophost_domain::error::{Error, Result};
use ophost_infrastructure::config::ConfigLoader;
use ophost_infrastructure::di::init_app;
use ophost_infrastructure::logging::init_logging;
use std::path::Path;
use tracing::info;

/// Run the operations endpoint host
///
/// Loads configuration, composes the application, starts the listener,
/// and serves until ctrl-c. Teardown runs on all exit paths once the
/// listener has started.
pub async fn run(config_path: Option<&Path>, port_override: Option<u16>) -> Result<()> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };

    let mut config = loader.load()?;
    if let Some(port) = port_override {
        config.server.port = port;
    }

    init_logging(config.logging.clone())?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        base_path = %config.server.base_path,
        "Starting operations endpoint host"
    );

    let ctx = init_app(config).await?;
    let host =
        EndpointHost::from_context(&ctx).map_err(|err| Error::configuration(err.to_string()))?;
    let running = host.start().await?;

    info!(addr = %running.addr(), "Endpoint host ready");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    running.stop().await
}
