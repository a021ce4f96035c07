//! DI container bootstrap
//!
//! The composition root: the single place where the concrete service is
//! wired to its contract, interceptors are attached, and configuration
//! is applied.
//!
//! ```text
//! AppConfig → StoredValueOperations (constructor-injected value)
//!                 ↓
//!           RecordingInterceptor (optional)
//!                 ↓
//!           OperationDispatcher → dill Catalog + AppContext
//! ```
//!
//! A missing `service.value` is rejected here, before any listener
//! exists, so the failure is a composition-time configuration error
//! rather than a call-time fault.

use crate::config::AppConfig;
use crate::di::catalog::assemble_catalog;
use crate::interception::{CallRecorder, OperationDispatcher, RecordingInterceptor};
use crate::service::StoredValueOperations;
use dill::Catalog;
use ophost_domain::error::{Error, Result};
use ophost_domain::ports::{Interceptor, OperationsService};
use std::sync::Arc;
use tracing::info;

/// Application context produced by the composition root
///
/// Holds the assembled object graph. Service access goes through the
/// typed accessors; the catalog is kept for lifecycle management and for
/// callers that want to resolve registered values themselves.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    catalog: Catalog,
    service: Arc<dyn OperationsService>,
    dispatcher: Arc<OperationDispatcher>,
    recorder: CallRecorder,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// The assembled dill catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The hosted service implementation
    pub fn service(&self) -> Arc<dyn OperationsService> {
        self.service.clone()
    }

    /// The dispatcher the transport hands incoming calls to
    pub fn dispatcher(&self) -> Arc<OperationDispatcher> {
        self.dispatcher.clone()
    }

    /// Handle onto the interception record
    pub fn recorder(&self) -> CallRecorder {
        self.recorder.clone()
    }

    /// Tear the context down to its catalog
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}

/// Assemble the application from configuration
///
/// # Errors
/// Returns `Error::Configuration` when `service.value` is absent: the
/// implementation takes its value as a constructor argument, so there is
/// nothing to construct without it.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let value = config.service.value.ok_or_else(|| {
        Error::configuration(
            "service.value is required: the service takes it as a constructor argument",
        )
    })?;

    let config = Arc::new(config);
    let recorder = CallRecorder::new();
    let service: Arc<dyn OperationsService> = Arc::new(StoredValueOperations::new(value));

    let mut interceptors: Vec<Arc<dyn Interceptor>> = Vec::new();
    if config.interception.enabled {
        interceptors.push(Arc::new(RecordingInterceptor::new(recorder.clone())));
    }

    info!(
        value,
        interceptors = interceptors.len(),
        "Composing operations service"
    );

    let dispatcher = Arc::new(OperationDispatcher::new(service.clone(), interceptors));

    let catalog = assemble_catalog(
        config.clone(),
        service.clone(),
        dispatcher.clone(),
        recorder.clone(),
    );

    Ok(AppContext {
        config,
        catalog,
        service,
        dispatcher,
        recorder,
    })
}
