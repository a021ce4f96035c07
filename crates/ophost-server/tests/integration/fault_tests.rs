//! Fault propagation scenarios
//!
//! Faults cross the wire as generic error envelopes; the full error
//! chain is published only when the debug behavior is attached.

use super::helpers::{demo_config, free_port, invoke_url, start_endpoint};
use ophost_server::transport::{RpcRequest, RpcResponse};

async fn invoke_unknown_operation(url: &str) -> RpcResponse {
    let request = RpcRequest::call("NoSuchOperation", 1);
    reqwest::Client::new()
        .post(url)
        .json(&request)
        .send()
        .await
        .expect("request should connect")
        .json()
        .await
        .expect("envelope should parse")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unknown_operation_is_a_method_not_found_fault() {
    let port = free_port();
    let (ctx, running) = start_endpoint(demo_config(port, 42)).await;

    let envelope = invoke_unknown_operation(&invoke_url(&ctx)).await;

    running.stop().await.expect("teardown should succeed");

    let fault = envelope.error.expect("fault expected");
    assert_eq!(fault.code, -32601);
    // Without the debug behavior the fault stays generic
    assert!(fault.data.is_none());
    assert!(envelope.result.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn debug_behavior_publishes_fault_detail() {
    let port = free_port();
    let mut config = demo_config(port, 42);
    config.behaviors.include_error_detail = true;

    let (ctx, running) = start_endpoint(config).await;

    let envelope = invoke_unknown_operation(&invoke_url(&ctx)).await;

    running.stop().await.expect("teardown should succeed");

    let fault = envelope.error.expect("fault expected");
    let detail = fault
        .data
        .as_ref()
        .and_then(|data| data.as_str())
        .expect("detail expected");
    assert!(detail.contains("NoSuchOperation"), "{detail}");
}
