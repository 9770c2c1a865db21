use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a provided value cannot be parsed. Every field
/// has a default, so an empty environment always succeeds.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a provided value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("PICKUPWATCH_ENV", "development"));
    let bind_addr = parse_addr("PICKUPWATCH_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PICKUPWATCH_LOG_LEVEL", "info");

    let fulfillment_base_url = or_default(
        "PICKUPWATCH_FULFILLMENT_BASE_URL",
        "https://www.apple.com",
    );
    let pushover_base_url = or_default(
        "PICKUPWATCH_PUSHOVER_BASE_URL",
        "https://api.pushover.net",
    );

    let request_timeout_secs = parse_u64("PICKUPWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "PICKUPWATCH_USER_AGENT",
        "pickupwatch/0.1 (pickup-availability-watcher)",
    );
    let inter_request_delay_ms = parse_u64("PICKUPWATCH_INTER_REQUEST_DELAY_MS", "300")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        fulfillment_base_url,
        pushover_base_url,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
