//! dill Catalog - IoC container configuration
//!
//! Registers the composed application services in a dill catalog via
//! `add_value()`. Construction happens in [`bootstrap::init_app`]; this
//! module only owns the registration step and the convenience entry
//! point for callers that want the catalog alone.
//!
//! [`bootstrap::init_app`]: crate::di::bootstrap::init_app

use crate::config::AppConfig;
use crate::di::bootstrap::{AppContext, init_app};
use crate::interception::{CallRecorder, OperationDispatcher};
use dill::{Catalog, CatalogBuilder};
use ophost_domain::error::Result;
use ophost_domain::ports::OperationsService;
use std::sync::Arc;
use tracing::info;

/// Register the assembled services in a catalog
pub(crate) fn assemble_catalog(
    config: Arc<AppConfig>,
    service: Arc<dyn OperationsService>,
    dispatcher: Arc<OperationDispatcher>,
    recorder: CallRecorder,
) -> Catalog {
    let catalog = CatalogBuilder::new()
        // Configuration
        .add_value(config)
        // Hosted service (behind its contract)
        .add_value(service)
        // Dispatch pipeline
        .add_value(dispatcher)
        // Interception record handle
        .add_value(recorder)
        .build();

    info!("Built dill Catalog with {} services", 4);

    catalog
}

/// Build the dill catalog for a configuration
///
/// Composition failures (a missing constructor argument, most notably)
/// surface here, before any listener starts.
pub async fn build_catalog(config: AppConfig) -> Result<Catalog> {
    init_app(config).await.map(AppContext::into_catalog)
}
