//! Apple fulfillment API response types for `GET /shop/fulfillment-messages`.
//!
//! ## Observed shape from the live endpoint
//!
//! The interesting payload sits several levels deep:
//! `body.content.pickupMessage.stores`. Everything else in the response
//! (header blocks, delivery messaging, promo content) is ignored by serde's
//! default unknown-field handling.
//!
//! ### `partsAvailability`
//! Keyed by part number. When a store does not carry a part at all the key is
//! simply absent from the map — absence is treated identically to
//! `"unavailable"` during selection.
//!
//! ### `pickupDisplay`
//! Only `"available"` and `"unavailable"` have been observed. Modeled as a
//! closed enum, so any third value is a deserialization error that fails the
//! whole run loudly rather than being silently treated as unavailable.
//!
//! ### Reservation URLs
//! Both `makeReservationUrl` and `reservationUrl` are present; only
//! `reservationUrl` is surfaced to callers, but both are required fields of
//! the validated shape.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level response from the fulfillment-messages endpoint.
#[derive(Debug, Deserialize)]
pub struct FulfillmentResponse {
    pub body: ResponseBody,
}

#[derive(Debug, Deserialize)]
pub struct ResponseBody {
    pub content: ResponseContent,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(rename = "pickupMessage")]
    pub pickup_message: PickupMessage,
}

#[derive(Debug, Deserialize)]
pub struct PickupMessage {
    pub stores: Vec<StoreRecord>,
}

/// One physical store in the vendor's pickup response, in vendor order
/// (nearest first, but the ordering is the vendor's and is never re-sorted).
#[derive(Debug, Deserialize)]
pub struct StoreRecord {
    /// Store display name without the "Apple " prefix, e.g. `"Michigan Avenue"`
    /// on some responses, `"Apple Michigan Avenue"` on others. Passed through.
    #[serde(rename = "storeName")]
    pub store_name: String,

    /// Human-readable distance from the queried location, e.g. `"0.5 mi"`.
    #[serde(rename = "storeDistanceWithUnit")]
    pub store_distance_with_unit: String,

    /// Reservation-flow entry URL. Required by the validated shape but not
    /// surfaced; `reservation_url` is the link we hand to users.
    #[serde(rename = "makeReservationUrl")]
    pub make_reservation_url: String,

    /// Deep link to reserve at this store.
    #[serde(rename = "reservationUrl")]
    pub reservation_url: String,

    /// Per-part availability, keyed by part number. A part the store does not
    /// stock is absent from the map.
    #[serde(rename = "partsAvailability")]
    pub parts_availability: HashMap<String, PartAvailability>,
}

/// Availability of a single part at a single store.
#[derive(Debug, Deserialize)]
pub struct PartAvailability {
    #[serde(rename = "storePickEligible")]
    pub store_pick_eligible: bool,

    #[serde(rename = "pickupDisplay")]
    pub pickup_display: PickupDisplay,

    /// Echo of the queried part number.
    #[serde(rename = "partNumber")]
    pub part_number: String,
}

/// Vendor-reported pickup status. Closed set: anything else fails parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickupDisplay {
    Available,
    Unavailable,
}
