//! Probe planning for one location.
//!
//! The resolver is deliberately serial: one outbound request in flight at a
//! time, one probe per watched part, in catalog order, with a courtesy pause
//! between them. Modeling the sequence as a plain iterator keeps that policy
//! visible and testable without any HTTP transport.

/// One outbound fulfillment request the resolver will make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe<'a> {
    pub location: &'a str,
    pub part: &'a str,
}

/// Yields the probes for `location`, one per part, in the given order.
pub fn location_probes<'a>(
    location: &'a str,
    parts: &'a [&'a str],
) -> impl Iterator<Item = Probe<'a>> + 'a {
    parts.iter().map(move |part| Probe { location, part })
}
