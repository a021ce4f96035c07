//! Wire envelope tests

use ophost_domain::error::Error;
use ophost_server::transport::{RpcRequest, RpcResponse};
use serde_json::{Value, json};

#[test]
fn success_envelope_omits_the_error_field() {
    let response = RpcResponse::success(Some(json!(1)), json!(42));
    let encoded = serde_json::to_value(&response).expect("serialize");

    assert_eq!(
        encoded,
        json!({"jsonrpc": "2.0", "result": 42, "id": 1})
    );
}

#[test]
fn generic_fault_carries_no_detail() {
    let err = Error::internal("secret stack trace");
    let response = RpcResponse::fault(Some(json!(7)), &err, false);
    let encoded = serde_json::to_value(&response).expect("serialize");

    assert_eq!(encoded["error"]["code"], json!(-32603));
    assert_eq!(encoded["error"]["message"], json!("operation invocation failed"));
    assert_eq!(encoded["error"].get("data"), None);
}

#[test]
fn debug_fault_carries_the_error_chain() {
    let err = Error::internal("operation blew up");
    let response = RpcResponse::fault(None, &err, true);
    let encoded = serde_json::to_value(&response).expect("serialize");

    let detail = encoded["error"]["data"].as_str().expect("detail string");
    assert!(detail.contains("operation blew up"), "{detail}");
}

#[test]
fn unknown_operation_maps_to_method_not_found() {
    let err = Error::operation_not_found("NoSuchOperation");
    let response = RpcResponse::fault(None, &err, false);
    let encoded = serde_json::to_value(&response).expect("serialize");

    assert_eq!(encoded["error"]["code"], json!(-32601));
    assert_eq!(
        encoded["error"]["message"],
        json!("operation not found: NoSuchOperation")
    );
}

#[test]
fn call_request_serializes_without_params() {
    let request = RpcRequest::call("GetValueFromConstructor", 3);
    let encoded = serde_json::to_value(&request).expect("serialize");

    assert_eq!(
        encoded,
        json!({"method": "GetValueFromConstructor", "id": 3})
    );
}

#[test]
fn response_envelope_parses_from_the_wire() {
    let raw = r#"{"jsonrpc": "2.0", "result": 42, "id": 1}"#;
    let response: RpcResponse = serde_json::from_str(raw).expect("deserialize");

    assert_eq!(response.result, Some(Value::from(42)));
    assert!(response.error.is_none());
}
