//! Configuration Loader Tests

use apic_domain::AuthScheme;
use apic_infrastructure::config::{ClientConfig, ConfigBuilder, ConfigLoader};
use apic_infrastructure::constants::DEFAULT_LOG_LEVEL;
use apic_providers::TransportConfig;
use std::time::Duration;
use tempfile::TempDir;

const GATEWAY_TOML: &str = r#"
[logging]
level = "debug"

[transport]
timeout = 20

[clients.orders]
scheme = "api_key"

[clients.orders.credentials]
url = "https://gateway.test/"
api_key = "K"

[clients.billing]
scheme = "basic"

[clients.billing.credentials]
url = "https://billing.test"
username = "alice"
password = "s3cret"
"#;

fn loader_for(toml: &str) -> (TempDir, ConfigLoader) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("apic.toml");
    std::fs::write(&path, toml).unwrap();
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("APIC_TEST_UNSET");
    (temp_dir, loader)
}

#[test]
fn test_config_loader_defaults_with_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(temp_dir.path().join("absent.toml"))
        .with_env_prefix("APIC_TEST_UNSET")
        .load()
        .unwrap();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.transport, TransportConfig::default());
    assert!(config.clients.is_empty());
}

#[test]
fn test_config_loader_reads_clients() {
    let (_dir, loader) = loader_for(GATEWAY_TOML);
    let config = loader.load().unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.transport.timeout, Some(Duration::from_secs(20)));

    let orders = &config.clients["orders"];
    assert_eq!(orders.scheme, AuthScheme::ApiKey);
    assert_eq!(orders.credentials["api_key"], "K");

    let billing = &config.clients["billing"];
    assert_eq!(billing.scheme, AuthScheme::Basic);
    assert_eq!(billing.credentials["username"], "alice");
}

#[test]
fn test_config_loader_rejects_incomplete_client() {
    let (_dir, loader) = loader_for(
        r#"
[clients.orders]
scheme = "api_key"

[clients.orders.credentials]
url = "https://gateway.test"
"#,
    );
    let error = loader.load().unwrap_err();
    assert!(error.is_configuration());
    assert!(error.to_string().contains("orders"));
}

#[test]
fn test_config_loader_rejects_invalid_log_level() {
    let (_dir, loader) = loader_for("[logging]\nlevel = \"loud\"\n");
    assert!(loader.load().unwrap_err().is_configuration());
}

#[test]
fn test_config_loader_rejects_unknown_scheme() {
    let (_dir, loader) = loader_for(
        r#"
[clients.orders]
scheme = "oauth"
"#,
    );
    assert!(loader.load().unwrap_err().is_configuration());
}

#[test]
fn test_environment_overrides_file() {
    let (_dir, loader) = loader_for(GATEWAY_TOML);
    let loader = loader.with_env_prefix("APIC_TEST_ENV_OVERRIDE");

    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("APIC_TEST_ENV_OVERRIDE_LOGGING__LEVEL", "warn");
    }
    let config = loader.load();
    unsafe {
        std::env::remove_var("APIC_TEST_ENV_OVERRIDE_LOGGING__LEVEL");
    }

    assert_eq!(config.unwrap().logging.level, "warn");
}

#[test]
fn test_environment_credentials_stay_strings() {
    let (_dir, loader) = loader_for("");
    let loader = loader.with_env_prefix("APIC_TEST_ENV_CREDENTIALS");
    let vars = [
        ("APIC_TEST_ENV_CREDENTIALS_CLIENTS__ORDERS__SCHEME", "basic"),
        (
            "APIC_TEST_ENV_CREDENTIALS_CLIENTS__ORDERS__CREDENTIALS__URL",
            "https://orders.test",
        ),
        ("APIC_TEST_ENV_CREDENTIALS_CLIENTS__ORDERS__CREDENTIALS__USERNAME", "svc"),
        ("APIC_TEST_ENV_CREDENTIALS_CLIENTS__ORDERS__CREDENTIALS__PASSWORD", "007123"),
    ];

    // SAFETY: the variable names are unique to this test.
    unsafe {
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
    }
    let config = loader.load();
    unsafe {
        for (name, _) in vars {
            std::env::remove_var(name);
        }
    }

    let config = config.unwrap();
    let orders = &config.clients["orders"];
    assert_eq!(orders.scheme, AuthScheme::Basic);
    assert_eq!(orders.credentials["url"], "https://orders.test");
    assert_eq!(orders.credentials["password"], "007123");
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let original = ConfigBuilder::new()
        .with_transport(TransportConfig::with_timeout(Duration::from_secs(5)))
        .with_client(
            "orders",
            ClientConfig::new(
                AuthScheme::ApiKey,
                [("url", "https://gateway.test"), ("api_key", "K")],
            ),
        )
        .build();

    let loader = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_prefix("APIC_TEST_UNSET");
    loader.save_to_file(&original, &config_path).unwrap();

    let loaded = loader.load().unwrap();
    assert_eq!(loaded, original);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}
