use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let config = build_app_config(lookup_from_map(&map)).expect("empty env must use defaults");

    assert_eq!(config.env, Environment::Development);
    assert_eq!(config.bind_addr.port(), 3000);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.fulfillment_base_url, "https://www.apple.com");
    assert_eq!(config.pushover_base_url, "https://api.pushover.net");
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.inter_request_delay_ms, 300);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PICKUPWATCH_ENV", "production");
    map.insert("PICKUPWATCH_BIND_ADDR", "127.0.0.1:8080");
    map.insert("PICKUPWATCH_FULFILLMENT_BASE_URL", "http://127.0.0.1:9999");
    map.insert("PICKUPWATCH_INTER_REQUEST_DELAY_MS", "800");

    let config = build_app_config(lookup_from_map(&map)).expect("valid overrides must parse");

    assert_eq!(config.env, Environment::Production);
    assert_eq!(config.bind_addr.port(), 8080);
    assert_eq!(config.fulfillment_base_url, "http://127.0.0.1:9999");
    assert_eq!(config.inter_request_delay_ms, 800);
}

#[test]
fn build_app_config_rejects_invalid_bind_addr() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PICKUPWATCH_BIND_ADDR", "not-an-addr");

    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PICKUPWATCH_BIND_ADDR"),
        "expected InvalidEnvVar(PICKUPWATCH_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_delay() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("PICKUPWATCH_INTER_REQUEST_DELAY_MS", "soon");

    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PICKUPWATCH_INTER_REQUEST_DELAY_MS"),
        "expected InvalidEnvVar(PICKUPWATCH_INTER_REQUEST_DELAY_MS), got: {result:?}"
    );
}
