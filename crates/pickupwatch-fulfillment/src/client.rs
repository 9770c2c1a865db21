//! HTTP client for Apple's `fulfillment-messages` pickup-availability endpoint.

use std::time::Duration;

use reqwest::Client;

use pickupwatch_core::AvailableStore;

use crate::error::FulfillmentError;
use crate::parse::available_stores;
use crate::plan::location_probes;
use crate::types::{FulfillmentResponse, StoreRecord};

/// HTTP client for the fulfillment-messages endpoint.
///
/// One client per process; probes are issued strictly one at a time with a
/// fixed courtesy pause between them. There is no retry and no backoff: a
/// malformed vendor response or a non-2xx status is fatal for the whole
/// invocation, by design — the external scheduler provides the only retry
/// surface.
#[derive(Clone)]
pub struct FulfillmentClient {
    client: Client,
    base_url: String,
    inter_request_delay: Duration,
}

impl FulfillmentClient {
    /// Creates a `FulfillmentClient` with configured timeout and `User-Agent`.
    ///
    /// `base_url` is the vendor origin (`https://www.apple.com` in
    /// production, a mock server in tests). `inter_request_delay_ms` is the
    /// pause inserted after each per-variant probe.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        inter_request_delay_ms: u64,
    ) -> Result<Self, FulfillmentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            inter_request_delay: Duration::from_millis(inter_request_delay_ms),
        })
    }

    /// Resolves pickup availability for every watched part at `location`.
    ///
    /// Probes the vendor once per part, in the given order, pausing
    /// [`Self::new`]'s `inter_request_delay_ms` after each probe. Matches
    /// accumulate across parts: outer order is part order, inner order is the
    /// vendor's store order. The result may be empty — that is the normal
    /// "no availability" outcome, not an error.
    ///
    /// # Errors
    ///
    /// Any probe failure ([`FulfillmentError::Http`],
    /// [`FulfillmentError::UnexpectedStatus`],
    /// [`FulfillmentError::Deserialize`]) aborts the remaining probes and
    /// propagates; no partial results are returned.
    pub async fn resolve(
        &self,
        location: &str,
        parts: &[&str],
    ) -> Result<Vec<AvailableStore>, FulfillmentError> {
        let mut matches = Vec::new();

        for probe in location_probes(location, parts) {
            let records = self.fetch_pickup_stores(probe.part, probe.location).await?;
            let available = available_stores(&records, probe.part);

            tracing::debug!(
                location = %probe.location,
                part = %probe.part,
                stores = records.len(),
                available = available.len(),
                "fulfillment probe complete"
            );

            matches.extend(available);
            tokio::time::sleep(self.inter_request_delay).await;
        }

        Ok(matches)
    }

    /// Fetches and validates the store list for one `(part, location)` probe.
    async fn fetch_pickup_stores(
        &self,
        part: &str,
        location: &str,
    ) -> Result<Vec<StoreRecord>, FulfillmentError> {
        let url = self.fulfillment_url(part, location)?;

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FulfillmentError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<FulfillmentResponse>(&body).map_err(|e| {
            FulfillmentError::Deserialize {
                context: format!("pickup availability for {part} near {location}"),
                source: e,
            }
        })?;

        Ok(parsed.body.content.pickup_message.stores)
    }

    /// Builds the fulfillment-messages URL for one probe.
    ///
    /// The fixed parameters select same-day pickup for an unlocked US device;
    /// `parts.0` carries the part number and `location` the free-text city
    /// string (percent-encoded by the query builder).
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::InvalidBaseUrl`] if the configured origin
    /// cannot be parsed as a URL base.
    fn fulfillment_url(&self, part: &str, location: &str) -> Result<String, FulfillmentError> {
        let base = format!("{}/shop/fulfillment-messages", self.base_url);
        let mut url =
            reqwest::Url::parse(&base).map_err(|e| FulfillmentError::InvalidBaseUrl {
                base_url: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("pl", "true")
            .append_pair("mts.0", "regular")
            .append_pair("mts.1", "compact")
            .append_pair("cppart", "UNLOCKED/US")
            .append_pair("parts.0", part)
            .append_pair("location", location);

        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
