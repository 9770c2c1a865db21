use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// A required Pushover secret is absent from the environment. Raised
    /// before any notification request is built or sent, so callers can tell
    /// a configuration problem apart from a delivery problem.
    #[error("missing environment variable: \"{0}\"")]
    MissingCredential(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid notification base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// Precondition violation: a notification was requested with no stores.
    #[error("notification requested with an empty store list")]
    EmptyStores,
}
