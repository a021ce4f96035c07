//! Configuration loading and validation tests
//!
//! The environment variable test mutates process state and must run
//! sequentially; it is `#[ignore]`d by default, as in:
//!
//! ```bash
//! cargo test -p ophost-infrastructure --test unit config -- --test-threads=1 --ignored
//! ```

use ophost_domain::error::Error;
use ophost_infrastructure::config::{AppConfig, ConfigLoader};

#[test]
fn defaults_describe_the_demo_endpoint() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.base_path, "/Operations.svc");
    assert_eq!(config.server.relative_path, "Operations");
    assert_eq!(config.server.close_grace_secs, 0);
    assert_eq!(config.service.value, None);
    assert!(!config.behaviors.publish_metadata);
    assert!(!config.behaviors.include_error_detail);
    assert!(!config.interception.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ophost.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 8123

[service]
value = 42

[interception]
enabled = true
"#,
    )
    .expect("write config");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("load config");

    assert_eq!(config.server.port, 8123);
    assert_eq!(config.service.value, Some(42));
    assert!(config.interception.enabled);
    // Untouched sections keep their defaults
    assert_eq!(config.server.base_path, "/Operations.svc");
}

#[test]
fn base_path_without_leading_slash_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ophost.toml");
    std::fs::write(&path, "[server]\nbase_path = \"Operations.svc\"\n").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("should reject base path");

    assert!(matches!(err, Error::Configuration { .. }), "{err}");
}

#[test]
fn relative_path_with_slash_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ophost.toml");
    std::fs::write(&path, "[server]\nrelative_path = \"a/b\"\n").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("should reject relative path");

    assert!(matches!(err, Error::Configuration { .. }), "{err}");
}

#[test]
fn invalid_log_level_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ophost.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect_err("should reject log level");

    assert!(matches!(err, Error::Configuration { .. }), "{err}");
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.service.value = Some(-7);
    config.behaviors.publish_metadata = true;

    let loader = ConfigLoader::new();
    loader.save_to_file(&config, &path).expect("save config");

    let loaded = loader
        .clone()
        .with_config_path(&path)
        .load()
        .expect("load saved config");

    assert_eq!(loaded.service.value, Some(-7));
    assert!(loaded.behaviors.publish_metadata);
}

/// Verify env vars with the `OPHOST__` prefix override file values
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn env_vars_override_defaults() {
    // SAFETY: test must run with --test-threads=1
    unsafe {
        std::env::set_var("OPHOST__SERVICE__VALUE", "99");
        std::env::set_var("OPHOST__SERVER__PORT", "8777");
    }

    let config = ConfigLoader::new().load().expect("load config");

    assert_eq!(config.service.value, Some(99));
    assert_eq!(config.server.port, 8777);

    // SAFETY: test must run with --test-threads=1
    unsafe {
        std::env::remove_var("OPHOST__SERVICE__VALUE");
        std::env::remove_var("OPHOST__SERVER__PORT");
    }
}
