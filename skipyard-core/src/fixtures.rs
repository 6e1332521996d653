//! Listings shared by the unit tests.

use crate::enrich::enrich_one;
use crate::model::{EnrichedSkip, RawSkip, SkipId};

pub(crate) fn raw_skip(id: u64, size: u32, allows_heavy_waste: bool) -> RawSkip {
    RawSkip {
        id: SkipId(id),
        size,
        hire_period_days: 14,
        transport_cost: None,
        per_tonne_cost: None,
        price_before_vat: 278.0,
        vat: 20.0,
        postcode: "NR32".to_owned(),
        area: String::new(),
        forbidden: false,
        created_at: "2025-04-03T13:51:46.897146".to_owned(),
        updated_at: "2025-04-07T13:16:52.813".to_owned(),
        allowed_on_road: true,
        allows_heavy_waste,
    }
}

pub(crate) fn enriched_skip(id: u64, size: u32) -> EnrichedSkip {
    enrich_one(raw_skip(id, size, false))
}

/// Enriched skip whose length and height metric strings are set directly.
pub(crate) fn measured_skip(id: u64, length: &str, height: &str) -> EnrichedSkip {
    let mut skip = enriched_skip(id, 99);
    skip.dimensions.length.metric = length.to_owned().into();
    skip.dimensions.height.metric = height.to_owned().into();
    skip
}
