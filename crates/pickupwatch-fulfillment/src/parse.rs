//! Selection and mapping from validated vendor records to [`AvailableStore`]s.

use pickupwatch_core::catalog::{display_name, storage_label};
use pickupwatch_core::AvailableStore;

use crate::types::{PickupDisplay, StoreRecord};

/// Keeps every record reporting `part` as available for pickup, in vendor
/// order, mapped to the output shape via the static catalog.
///
/// A record whose `partsAvailability` lacks `part` entirely is excluded —
/// absence of the key means the store does not stock the part, which is the
/// same outcome as an explicit `"unavailable"`.
pub(crate) fn available_stores(records: &[StoreRecord], part: &str) -> Vec<AvailableStore> {
    records
        .iter()
        .filter(|record| {
            record
                .parts_availability
                .get(part)
                .is_some_and(|availability| availability.pickup_display == PickupDisplay::Available)
        })
        .map(|record| AvailableStore {
            name: record.store_name.clone(),
            distance: record.store_distance_with_unit.clone(),
            reservation_url: record.reservation_url.clone(),
            model: display_name(part).to_owned(),
            storage: storage_label(part).to_owned(),
        })
        .collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
