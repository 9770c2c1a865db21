pub mod credentials;
pub mod error;
pub mod notifier;

pub use credentials::Credentials;
pub use error::NotifyError;
pub use notifier::Notifier;
