//! Pushover dispatch for a non-empty availability result.

use std::time::Duration;

use reqwest::Client;

use pickupwatch_core::AvailableStore;

use crate::credentials::Credentials;
use crate::error::NotifyError;

/// Everything that goes onto the Pushover request besides the credentials.
#[derive(Debug, PartialEq, Eq)]
struct NotificationParams {
    title: String,
    /// HTML message body: one anchor per store, comma-separated.
    message: String,
    /// Deep link to the buy page for the first-ranked store's storage tier.
    url: String,
    url_title: String,
}

/// Sends one push notification per winning sweep.
///
/// Delivery is fire-and-forget: the response status is never inspected and
/// nothing is retried. Transport-level failures still propagate, like every
/// other error in the pipeline.
#[derive(Clone)]
pub struct Notifier {
    client: Client,
    base_url: String,
}

impl Notifier {
    /// Creates a `Notifier` with configured timeout and `User-Agent`.
    ///
    /// `base_url` is the Pushover origin (`https://api.pushover.net` in
    /// production, a mock server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Sends exactly one notification summarizing `stores` at `location`.
    ///
    /// The first store in `stores` is the first-ranked one: it supplies the
    /// title storage tier, the deep link, and the link label. Ranking is
    /// discovery order, not distance.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::EmptyStores`] — precondition violation; nothing sent.
    /// - [`NotifyError::InvalidBaseUrl`] — misconfigured Pushover origin.
    /// - [`NotifyError::Http`] — transport failure while sending.
    pub async fn notify(
        &self,
        credentials: &Credentials,
        location: &str,
        stores: &[AvailableStore],
    ) -> Result<(), NotifyError> {
        let Some(first) = stores.first() else {
            return Err(NotifyError::EmptyStores);
        };

        let params = build_params(location, first, stores);
        let url = self.message_url(credentials, &params)?;

        tracing::info!(
            location = %location,
            stores = stores.len(),
            first_ranked = %first.name,
            "sending pickup-availability notification"
        );

        // Fire-and-forget: no status branching, no retry.
        self.client.post(url).send().await?;
        Ok(())
    }

    /// Builds the `messages.json` URL with all fields as query parameters,
    /// credentials included (Pushover's API takes them as parameters, not
    /// headers).
    fn message_url(
        &self,
        credentials: &Credentials,
        params: &NotificationParams,
    ) -> Result<reqwest::Url, NotifyError> {
        let base = format!("{}/1/messages.json", self.base_url);
        let mut url = reqwest::Url::parse(&base).map_err(|e| NotifyError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        url.query_pairs_mut()
            .append_pair("token", &credentials.token)
            .append_pair("user", &credentials.user_key)
            .append_pair("title", &params.title)
            .append_pair("message", &params.message)
            .append_pair("html", "1")
            .append_pair("url", &params.url)
            .append_pair("url_title", &params.url_title);

        Ok(url)
    }
}

/// Composes title, body, and deep link from the first-ranked store and the
/// full result list.
fn build_params(
    location: &str,
    first: &AvailableStore,
    stores: &[AvailableStore],
) -> NotificationParams {
    let anchors: Vec<String> = stores
        .iter()
        .map(|store| {
            format!(
                "<a href=\"{}\">Apple {} ({})</a>",
                store.reservation_url, store.name, store.distance
            )
        })
        .collect();

    NotificationParams {
        title: format!(
            "Available iPhone 15 Pro MAX ({}) in {location}",
            first.storage.to_uppercase()
        ),
        message: format!("Available stores: {}", anchors.join(", ")),
        url: format!(
            "https://www.apple.com/shop/buy-iphone/iphone-15-pro/6.7-inch-display-{}-blue-titanium-unlocked",
            first.storage
        ),
        url_title: format!(
            "Go to Apple website to make a reservation at {} store ({})",
            first.name, first.distance
        ),
    }
}
