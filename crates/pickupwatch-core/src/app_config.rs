use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration, loaded from env vars with defaults for every field.
///
/// Deliberately secret-free: the Pushover credentials are read from the
/// environment at notification-dispatch time, not here, so a missing secret
/// surfaces as a notify-time configuration error rather than preventing
/// startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Origin of the Apple fulfillment endpoint. Overridable for tests.
    pub fulfillment_base_url: String,
    /// Origin of the Pushover API. Overridable for tests.
    pub pushover_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Courtesy pause between sequential per-variant probes.
    pub inter_request_delay_ms: u64,
}
