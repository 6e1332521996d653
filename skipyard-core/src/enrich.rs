//! Turns raw listings into display-ready skips.

use std::borrow::Cow;

use tracing::debug;

use crate::model::{
    Dimension, Dimensions, EnrichedSkip, NOT_AVAILABLE, RawSkip, SkipImage, Suitability,
};
use crate::reference::reference;

/// Size bands with an inclusive upper bound, checked in order.
const BOUNDED_BANDS: [(u32, [Suitability; 2]); 2] = [
    (8, [Suitability::GardenWaste, Suitability::HomeClearance]),
    (
        16,
        [Suitability::RenovationWaste, Suitability::ConstructionDebris],
    ),
];

/// Tags for every size above the last bounded band.
const OPEN_BAND: [Suitability; 2] = [Suitability::CommercialWaste, Suitability::LargeConstruction];

/// Images used for every size without an exact rule.
pub const DEFAULT_IMAGE: SkipImage = SkipImage {
    schematic: "/images/skip-only.png",
    realistic: "/images/smSkip.png",
    width: 120,
    height: 60,
};

/// Exact-size image overrides.
const IMAGE_RULES: [(u32, SkipImage); 2] = [
    (
        20,
        SkipImage {
            schematic: "/images/20yd.png",
            realistic: "/images/lgSkip.png",
            width: 160,
            height: 80,
        },
    ),
    (
        40,
        SkipImage {
            schematic: "/images/40yd.png",
            realistic: "/images/lgSkip.png",
            width: 200,
            height: 100,
        },
    ),
];

/// Base tags for the size band that `size` falls into.
#[must_use]
pub fn band_tags(size: u32) -> [Suitability; 2] {
    BOUNDED_BANDS
        .iter()
        .find(|(upper, _)| size <= *upper)
        .map_or(OPEN_BAND, |(_, tags)| *tags)
}

/// Suitability tags for a skip: the band tags, then heavy materials when allowed.
#[must_use]
pub fn suitability(size: u32, allows_heavy_waste: bool) -> Vec<Suitability> {
    let mut tags = band_tags(size).to_vec();
    if allows_heavy_waste {
        tags.push(Suitability::HeavyMaterials);
    }
    tags
}

/// Image assets for an exact size, falling back to [`DEFAULT_IMAGE`].
#[must_use]
pub fn image_for(size: u32) -> SkipImage {
    IMAGE_RULES
        .iter()
        .find(|(rule_size, _)| *rule_size == size)
        .map_or(DEFAULT_IMAGE, |(_, image)| *image)
}

/// Dimensions used when the catalogue has no entry for `size`.
#[must_use]
pub fn fallback_dimensions(size: u32) -> Dimensions {
    Dimensions {
        size: Dimension {
            imperial: Cow::Owned(format!("{size} cu YRDs")),
            metric: Cow::Borrowed(NOT_AVAILABLE),
        },
        length: Dimension::unknown(),
        width: Dimension::unknown(),
        height: Dimension::unknown(),
    }
}

/// Enrich a single listing.
#[must_use]
pub fn enrich_one(raw: RawSkip) -> EnrichedSkip {
    let size = raw.size;
    let suitable = suitability(size, raw.allows_heavy_waste);
    let image = image_for(size);

    let (description, bin_bag_capacity, dimensions, category) = match reference(size) {
        Some(entry) => (
            Cow::Borrowed(entry.description),
            Cow::Borrowed(entry.bin_bag_capacity),
            entry.dimensions.clone(),
            entry.category,
        ),
        None => {
            debug!(size, id = %raw.id, "no catalogue entry for skip size");
            (
                Cow::Owned(format!("{size} yard skip for waste disposal")),
                Cow::Borrowed(NOT_AVAILABLE),
                fallback_dimensions(size),
                None,
            )
        }
    };

    EnrichedSkip {
        raw,
        suitable,
        image,
        description,
        bin_bag_capacity,
        dimensions,
        category,
    }
}

/// Enrich listings, keeping their order and count.
pub fn enrich<I>(raw: I) -> Vec<EnrichedSkip>
where
    I: IntoIterator<Item = RawSkip>,
{
    let enriched: Vec<EnrichedSkip> = raw.into_iter().map(enrich_one).collect();
    debug!(count = enriched.len(), "enriched skip listings");
    enriched
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::fixtures::raw_skip;
    use crate::model::SkipCategory;

    fn labels(tags: &[Suitability]) -> Vec<&'static str> {
        tags.iter().map(|tag| tag.as_str()).collect()
    }

    #[test]
    fn bands_have_inclusive_upper_bounds() {
        assert_eq!(labels(&band_tags(0)), ["Garden waste", "Home clearance"]);
        assert_eq!(labels(&band_tags(8)), ["Garden waste", "Home clearance"]);
        assert_eq!(
            labels(&band_tags(9)),
            ["Renovation waste", "Construction debris"]
        );
        assert_eq!(
            labels(&band_tags(16)),
            ["Renovation waste", "Construction debris"]
        );
        assert_eq!(
            labels(&band_tags(17)),
            ["Commercial waste", "Large construction"]
        );
    }

    #[test]
    fn heavy_waste_appends_one_tag() {
        assert_eq!(
            labels(&suitability(12, true)),
            ["Renovation waste", "Construction debris", "Heavy materials"]
        );
        assert_eq!(labels(&suitability(4, false)), ["Garden waste", "Home clearance"]);
    }

    #[test]
    fn image_dispatch_is_exact_match() {
        let twenty = image_for(20);
        assert_eq!(twenty.schematic, "/images/20yd.png");
        assert_eq!(twenty.realistic, "/images/lgSkip.png");
        assert_eq!((twenty.width, twenty.height), (160, 80));

        let forty = image_for(40);
        assert_eq!(forty.schematic, "/images/40yd.png");
        assert_eq!(forty.realistic, "/images/lgSkip.png");
        assert_eq!((forty.width, forty.height), (200, 100));

        for size in [6, 12, 17, 19, 21, 39, 41, 1000] {
            assert_eq!(image_for(size), DEFAULT_IMAGE, "size {size}");
        }
        assert_eq!((DEFAULT_IMAGE.width, DEFAULT_IMAGE.height), (120, 60));
    }

    #[test]
    fn known_sizes_take_catalogue_data() {
        let skip = enrich_one(raw_skip(1, 4, false));
        let entry = reference(4).expect("4 yards is catalogued");

        assert_eq!(skip.description, entry.description);
        assert_eq!(skip.bin_bag_capacity, entry.bin_bag_capacity);
        assert_eq!(skip.dimensions, entry.dimensions);
        assert_eq!(skip.category, Some(SkipCategory::Standard));
    }

    #[test]
    fn unknown_size_uses_fallbacks() {
        let skip = enrich_one(raw_skip(7, 99, true));

        assert_eq!(
            labels(&skip.suitable),
            ["Commercial waste", "Large construction", "Heavy materials"]
        );
        assert_eq!(skip.description, "99 yard skip for waste disposal");
        assert_eq!(skip.bin_bag_capacity, "N/A");
        assert_eq!(skip.dimensions.size.imperial, "99 cu YRDs");
        assert_eq!(skip.dimensions.size.metric, "N/A");
        for dimension in [
            &skip.dimensions.length,
            &skip.dimensions.width,
            &skip.dimensions.height,
        ] {
            assert_eq!(dimension, &Dimension::unknown());
        }
        assert_eq!(skip.category, None);
        assert_eq!(skip.image, DEFAULT_IMAGE);
    }

    #[test]
    fn mixed_listing_keeps_order_and_per_size_data() {
        let enriched = enrich(vec![
            raw_skip(1, 8, false),
            raw_skip(2, 20, false),
            raw_skip(3, 6, false),
        ]);

        let sizes: Vec<u32> = enriched.iter().map(EnrichedSkip::size).collect();
        assert_eq!(sizes, vec![8, 20, 6]);

        let twenty = enriched.get(1).expect("second listing");
        assert_eq!(twenty.image, image_for(20));

        let six = enriched.get(2).expect("third listing");
        let six_entry = reference(6).expect("6 yards is catalogued");
        assert_eq!(six.description, six_entry.description);
        assert_eq!(six.dimensions, six_entry.dimensions);
        assert_ne!(six.dimensions, reference(8).expect("8 yards").dimensions);
    }

    #[test]
    fn raw_fields_pass_through() {
        let raw = raw_skip(42, 14, true);
        let skip = enrich_one(raw.clone());
        assert_eq!(skip.raw, raw);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(enrich(Vec::new()).is_empty());
    }

    proptest! {
        #[test]
        fn enrich_preserves_order_and_count(
            listings in prop::collection::vec((0u32..64, any::<bool>()), 0..32)
        ) {
            let raw: Vec<RawSkip> = listings
                .iter()
                .enumerate()
                .map(|(idx, (size, heavy))| raw_skip(idx as u64, *size, *heavy))
                .collect();

            let enriched = enrich(raw.clone());

            prop_assert_eq!(enriched.len(), raw.len());
            for (skip, original) in enriched.iter().zip(&raw) {
                prop_assert_eq!(&skip.raw, original);
                prop_assert_eq!(
                    skip.suitable.last() == Some(&Suitability::HeavyMaterials),
                    original.allows_heavy_waste
                );
            }
        }
    }
}
