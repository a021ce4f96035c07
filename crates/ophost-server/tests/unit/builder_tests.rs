//! Endpoint host builder tests

use ophost_infrastructure::interception::OperationDispatcher;
use ophost_infrastructure::service::StoredValueOperations;
use ophost_server::{BuilderError, EndpointConfig, EndpointHost};
use std::sync::Arc;

fn dispatcher() -> Arc<OperationDispatcher> {
    Arc::new(OperationDispatcher::new(
        Arc::new(StoredValueOperations::new(42)),
        Vec::new(),
    ))
}

#[test]
fn missing_dispatcher_is_a_composition_error() {
    let err = EndpointHost::builder()
        .with_config(EndpointConfig::localhost(8000))
        .build()
        .expect_err("builder should reject a host without a dispatcher");

    assert!(matches!(err, BuilderError::MissingDependency(_)));
    assert_eq!(
        err.to_string(),
        "Missing required dependency: operation dispatcher"
    );
}

#[test]
fn dispatcher_alone_is_enough() {
    let host = EndpointHost::builder()
        .with_dispatcher(dispatcher())
        .build()
        .expect("builder should accept defaults for the rest");

    // Unset addressing falls back to the default endpoint
    assert_eq!(host.config().port, 8000);
    assert_eq!(host.config().base_path, "/Operations.svc");
}

#[test]
fn explicit_config_is_kept() {
    let host = EndpointHost::builder()
        .with_dispatcher(dispatcher())
        .with_config(EndpointConfig::localhost(8555))
        .build()
        .expect("builder should succeed");

    assert_eq!(host.config().port, 8555);
}
