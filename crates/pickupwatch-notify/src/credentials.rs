use crate::error::NotifyError;

pub const TOKEN_VAR: &str = "PUSHOVER_TOKEN";
pub const USER_KEY_VAR: &str = "PUSHOVER_USER_KEY";

/// Pushover API credentials, loaded at notification-dispatch time.
///
/// Deliberately not part of the application config: a run that finds no
/// availability never needs them, and a missing secret should fail the
/// notification step with a typed error rather than prevent startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub user_key: String,
}

impl Credentials {
    /// Load both secrets from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingCredential`] naming the first absent
    /// variable. No network call has been made at that point.
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Load both secrets using the provided lookup function.
    ///
    /// Decoupled from the actual environment so tests can use a pure
    /// `HashMap` lookup — no `set_var`/`remove_var` needed.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingCredential`] naming the first absent
    /// variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifyError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let require = |var: &str| -> Result<String, NotifyError> {
            lookup(var).map_err(|_| NotifyError::MissingCredential(var.to_string()))
        };

        Ok(Self {
            token: require(TOKEN_VAR)?,
            user_key: require(USER_KEY_VAR)?,
        })
    }
}
