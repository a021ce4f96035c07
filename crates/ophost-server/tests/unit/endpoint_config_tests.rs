//! Endpoint addressing tests

use ophost_infrastructure::config::AppConfig;
use ophost_server::EndpointConfig;

#[test]
fn invoke_path_joins_base_and_relative() {
    let config = EndpointConfig::default();
    assert_eq!(config.invoke_path(), "/Operations.svc/Operations");
}

#[test]
fn trailing_slash_on_base_path_does_not_double_up() {
    let config = EndpointConfig {
        base_path: "/Operations.svc/".to_string(),
        ..EndpointConfig::default()
    };
    assert_eq!(config.invoke_path(), "/Operations.svc/Operations");
}

#[test]
fn urls_include_host_port_and_paths() {
    let config = EndpointConfig::localhost(8000);
    assert_eq!(
        config.invoke_url(),
        "http://127.0.0.1:8000/Operations.svc/Operations"
    );
    assert_eq!(config.metadata_url(), "http://127.0.0.1:8000/Operations.svc");
}

#[test]
fn app_config_addressing_carries_over() {
    let mut app = AppConfig::default();
    app.server.host = "0.0.0.0".to_string();
    app.server.port = 9001;
    app.server.base_path = "/Calc.svc".to_string();
    app.server.relative_path = "Calc".to_string();
    app.server.close_grace_secs = 3;

    let config = EndpointConfig::from_app_config(&app);

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 9001);
    assert_eq!(config.invoke_path(), "/Calc.svc/Calc");
    assert_eq!(config.close_grace_secs, 3);
}
