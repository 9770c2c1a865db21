//! The sweep driver: one polling run across all candidate locations.
//!
//! A run walks the candidate cities in priority order, resolves the full
//! watched catalog at each, and stops at the first city reporting any
//! availability. That city gets exactly one push notification; later cities
//! are never queried even if they might also have stock. If every city comes
//! back empty the run terminates quietly with no notification.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use pickupwatch_core::AvailableStore;
use pickupwatch_fulfillment::{FulfillmentClient, FulfillmentError};
use pickupwatch_notify::{Credentials, Notifier, NotifyError};

/// Terminal message for a run that found nothing. Part of the cron response
/// contract.
pub const NO_AVAILABILITY_MESSAGE: &str =
    "No stores with iPhone 15 Pro MAX available at the moment";

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Fulfillment(#[from] FulfillmentError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Terminal result of one sweep.
#[derive(Debug)]
pub enum SweepOutcome {
    /// The first city with availability, with every matching store, after the
    /// notification has gone out.
    Found {
        city: String,
        stores: Vec<AvailableStore>,
    },
    /// Every candidate city came back empty; nothing was sent.
    Exhausted,
}

/// The cron response contract: `{city, stores}` on a hit,
/// `{message}` when nothing was found.
impl Serialize for SweepOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SweepOutcome::Found { city, stores } => {
                let mut s = serializer.serialize_struct("SweepOutcome", 2)?;
                s.serialize_field("city", city)?;
                s.serialize_field("stores", stores)?;
                s.end()
            }
            SweepOutcome::Exhausted => {
                let mut s = serializer.serialize_struct("SweepOutcome", 1)?;
                s.serialize_field("message", NO_AVAILABILITY_MESSAGE)?;
                s.end()
            }
        }
    }
}

/// Driver states. `Searching` advances through the location list; the two
/// terminal states carry what the run report needs.
enum SweepState<'a> {
    Searching,
    Found {
        location: &'a str,
        stores: Vec<AvailableStore>,
    },
    Exhausted,
}

/// Runs one sweep: resolve each location in order, notify once on the first
/// hit, report the outcome.
///
/// `credential_lookup` supplies the Pushover secrets and is only consulted in
/// the `Found` state, right before dispatch — a run with no availability
/// never needs credentials, and a missing secret surfaces as
/// [`NotifyError::MissingCredential`] after resolution but before any
/// notification request is made.
///
/// # Errors
///
/// Any resolver or notifier failure aborts the whole run; there is no
/// fallback to the next location and no partial result.
pub async fn run_sweep<F>(
    resolver: &FulfillmentClient,
    notifier: &Notifier,
    locations: &[&str],
    parts: &[&str],
    credential_lookup: F,
) -> Result<SweepOutcome, SweepError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut remaining = locations.iter();
    let mut state = SweepState::Searching;

    loop {
        state = match state {
            SweepState::Searching => match remaining.next() {
                None => SweepState::Exhausted,
                Some(location) => {
                    tracing::info!(location = %location, "sweeping location");
                    let stores = resolver.resolve(location, parts).await?;

                    if stores.is_empty() {
                        tracing::info!(location = %location, "no availability");
                        SweepState::Searching
                    } else {
                        SweepState::Found { location, stores }
                    }
                }
            },

            SweepState::Found { location, stores } => {
                tracing::info!(
                    location = %location,
                    stores = stores.len(),
                    "availability found, notifying"
                );
                let credentials = Credentials::from_lookup(&credential_lookup)?;
                notifier.notify(&credentials, location, &stores).await?;

                return Ok(SweepOutcome::Found {
                    city: location.to_owned(),
                    stores,
                });
            }

            SweepState::Exhausted => {
                tracing::info!("all candidate locations exhausted");
                return Ok(SweepOutcome::Exhausted);
            }
        };
    }
}
