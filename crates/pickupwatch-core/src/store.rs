use serde::{Deserialize, Serialize};

/// A store reporting same-day-pickup availability for one watched variant.
///
/// Built per run from a vendor `StoreRecord` plus the static catalog; never
/// persisted. Serializes camelCase (`reservationUrl`) because the JSON shape
/// is part of the cron response contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableStore {
    /// Store name as reported by the vendor, e.g. `"Apple Michigan Avenue"`.
    pub name: String,
    /// Human-readable distance string, e.g. `"0.5 mi"`. Passed through as-is.
    pub distance: String,
    /// Vendor reservation deep link for this store.
    pub reservation_url: String,
    /// Resolved display name, e.g. `"iPhone 15 Pro Max 256GB Blue Titanium"`.
    pub model: String,
    /// Normalized storage label (`"256gb"`, `"512gb"`, `"1tb"`).
    pub storage: String,
}
