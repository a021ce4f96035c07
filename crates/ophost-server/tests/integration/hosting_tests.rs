//! Hosting scenarios
//!
//! The composed service is hosted over HTTP and invoked through the
//! standard client proxy, not through any in-process shortcut.

use super::helpers::{demo_config, free_port, invoke_url, start_endpoint};
use ophost_domain::error::Error;
use ophost_domain::ports::OperationsService;
use ophost_server::{EndpointHost, OperationsClient};

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn client_receives_the_constructor_injected_value() {
    let port = free_port();
    let (ctx, running) = start_endpoint(demo_config(port, 42)).await;

    let client = OperationsClient::new(invoke_url(&ctx));
    let result = client.get_value_from_constructor().await;

    running.stop().await.expect("teardown should succeed");
    assert_eq!(result.expect("call should succeed"), 42);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn negative_and_zero_values_survive_the_round_trip() {
    for value in [-42, 0, i64::from(i32::MAX)] {
        let port = free_port();
        let (ctx, running) = start_endpoint(demo_config(port, value)).await;

        let client = OperationsClient::new(invoke_url(&ctx));
        let result = client.get_value_from_constructor().await;

        running.stop().await.expect("teardown should succeed");
        assert_eq!(result.expect("call should succeed"), value);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn repeated_calls_return_the_same_value() {
    let port = free_port();
    let (ctx, running) = start_endpoint(demo_config(port, 7)).await;

    let client = OperationsClient::new(invoke_url(&ctx));
    let mut results = Vec::new();
    for _ in 0..3 {
        results.push(client.get_value_from_constructor().await);
    }

    running.stop().await.expect("teardown should succeed");
    for result in results {
        assert_eq!(result.expect("call should succeed"), 7);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn teardown_frees_the_address_for_rebinding() {
    let port = free_port();

    let (_ctx, running) = start_endpoint(demo_config(port, 1)).await;
    running.stop().await.expect("first teardown should succeed");

    // Same port again: the socket must have been released
    let (ctx2, running2) = start_endpoint(demo_config(port, 2)).await;
    let client = OperationsClient::new(invoke_url(&ctx2));
    let result = client.get_value_from_constructor().await;

    running2.stop().await.expect("second teardown should succeed");
    assert_eq!(result.expect("call should succeed"), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn occupied_address_fails_at_start_with_a_binding_error() {
    let port = free_port();
    let (_ctx, running) = start_endpoint(demo_config(port, 1)).await;

    let ctx2 = ophost_infrastructure::di::init_app(demo_config(port, 2))
        .await
        .expect("composition should succeed");
    let host = EndpointHost::from_context(&ctx2).expect("host should build");
    let err = host
        .start()
        .await
        .expect_err("second bind on the same port should fail");

    running.stop().await.expect("teardown should succeed");
    assert!(matches!(err, Error::Binding { .. }), "{err}");
}
