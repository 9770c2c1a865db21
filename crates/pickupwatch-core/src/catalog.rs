//! Static catalog of watched iPhone variants and candidate pickup cities.
//!
//! Apple identifies a sellable configuration (model + storage + color +
//! carrier lock) by a part number like `MU693LL/A`. The watcher polls a fixed
//! set of Blue Titanium iPhone 15 Pro Max parts; the display helpers below
//! are total over arbitrary strings so an unrecognized part number coming
//! back from the vendor can never panic the run — it falls through to a
//! generic label instead.

/// iPhone 15 Pro Max 256GB Blue Titanium, unlocked US.
pub const IPHONE_15_PRO_MAX_256: &str = "MU693LL/A";
/// iPhone 15 Pro Max 512GB Blue Titanium, unlocked US.
pub const IPHONE_15_PRO_MAX_512: &str = "MU6E3LL/A";
/// iPhone 15 Pro Max 1TB Blue Titanium, unlocked US.
pub const IPHONE_15_PRO_MAX_1024: &str = "MU6J3LL/A";

/// Watched part numbers, in probe order. The resolver queries them one at a
/// time and the first match in this order becomes the notification's
/// first-ranked store.
pub const WATCHED_PARTS: [&str; 3] = [
    IPHONE_15_PRO_MAX_256,
    IPHONE_15_PRO_MAX_512,
    IPHONE_15_PRO_MAX_1024,
];

/// Candidate cities, in search-priority order. The sweep stops at the first
/// city with any availability, so earlier entries win.
pub const CANDIDATE_LOCATIONS: [&str; 3] = ["Chicago, IL", "New York, NY", "Portland, OR"];

/// Human-readable product name for a part number.
///
/// Total over any string: unknown parts map to a generic family name rather
/// than an error.
#[must_use]
pub fn display_name(part: &str) -> &'static str {
    match part {
        IPHONE_15_PRO_MAX_256 => "iPhone 15 Pro Max 256GB Blue Titanium",
        IPHONE_15_PRO_MAX_512 => "iPhone 15 Pro Max 512GB Blue Titanium",
        IPHONE_15_PRO_MAX_1024 => "iPhone 15 Pro Max 1024GB Blue Titanium",
        _ => "iPhone 15 Pro",
    }
}

/// Normalized storage label for a part number, as used in Apple's buy-page
/// URL slugs (`256gb`, `512gb`, `1tb`).
///
/// Total over any string; unknown parts default to `512gb`.
#[must_use]
pub fn storage_label(part: &str) -> &'static str {
    match part {
        IPHONE_15_PRO_MAX_256 => "256gb",
        IPHONE_15_PRO_MAX_512 => "512gb",
        IPHONE_15_PRO_MAX_1024 => "1tb",
        _ => "512gb",
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
