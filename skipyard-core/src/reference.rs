//! Catalogue of skip dimensions and descriptions, keyed by size in yards.
//!
//! The table ships with the binary and is never reloaded.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::model::{Dimension, Dimensions, SkipCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Catalogue entry for one skip size.
pub struct SkipReference {
    /// Marketing description.
    pub description: &'static str,
    /// Approximate capacity in bin bags.
    pub bin_bag_capacity: &'static str,
    /// Volume and outer measurements.
    pub dimensions: Dimensions,
    /// Construction category, when the catalogue names one.
    pub category: Option<SkipCategory>,
}

static CATALOGUE: LazyLock<BTreeMap<u32, SkipReference>> = LazyLock::new(build_catalogue);

/// Look up the catalogue entry for an exact size in yards.
#[must_use]
pub fn reference(size: u32) -> Option<&'static SkipReference> {
    CATALOGUE.get(&size)
}

/// Sizes present in the catalogue, ascending.
pub fn reference_sizes() -> impl Iterator<Item = u32> {
    CATALOGUE.keys().copied()
}

fn build_catalogue() -> BTreeMap<u32, SkipReference> {
    BTreeMap::from([
        (
            4,
            SkipReference {
                description: "4 yard skips, normally known as \"midi skips\", are a great size for small domestic jobs.",
                bin_bag_capacity: "30–40",
                dimensions: Dimensions {
                    size: Dimension::fixed("4 cu YRDs", "3.06m³"),
                    length: Dimension::fixed("5'11\"", "1.80m"),
                    width: Dimension::fixed("4′", "1.22m"),
                    height: Dimension::fixed("3'2″", "0.96m"),
                },
                category: Some(SkipCategory::Standard),
            },
        ),
        (
            6,
            SkipReference {
                description: "6 yard skips are referred to as \"builders skips\" and are great for hardcore waste.",
                bin_bag_capacity: "50–60",
                dimensions: Dimensions {
                    size: Dimension::fixed("6 cu YRDs", "4.06m³"),
                    length: Dimension::fixed("8'6″", "2.60m"),
                    width: Dimension::fixed("5′", "1.52m"),
                    height: Dimension::fixed("4′", "1.22m"),
                },
                category: None,
            },
        ),
        (
            8,
            SkipReference {
                description: "8 yard skips are the most popular. They are referred to as \"builders skips\", great for hardcore waste.",
                bin_bag_capacity: "60–80",
                dimensions: Dimensions {
                    size: Dimension::fixed("8 cu YRDs", "6.12m³"),
                    length: Dimension::fixed("10'6″", "3.2m"),
                    width: Dimension::fixed("5'9″", "1.75m"),
                    height: Dimension::fixed("4′", "1.22m"),
                },
                category: None,
            },
        ),
        (
            10,
            SkipReference {
                description: "10 yard skips are great for big cleanouts and bulky waste.",
                bin_bag_capacity: "80–100",
                dimensions: Dimensions {
                    size: Dimension::fixed("10 cu YRDs", "7.6m³"),
                    length: Dimension::fixed("12′", "3.5m"),
                    width: Dimension::fixed("5'9″", "1.75m"),
                    height: Dimension::fixed("4'11\"", "1.5m"),
                },
                category: None,
            },
        ),
        (
            12,
            SkipReference {
                description: "12 yard skips, sometimes referred to as \"maxi skips\", are great for large business or house clear outs. Not suitable for heavy hardcore due to weight restrictions.",
                bin_bag_capacity: "100–120",
                dimensions: Dimensions {
                    size: Dimension::fixed("12 cu YRDs", "9.8m³"),
                    length: Dimension::fixed("12'2″", "3.7m"),
                    width: Dimension::fixed("5'9″", "1.75m"),
                    height: Dimension::fixed("5'6″", "1.68m"),
                },
                category: None,
            },
        ),
        (
            14,
            SkipReference {
                description: "14 yard skips are a bit larger than the 12 yards and are again usually used for large business or house clear outs. They are not suitable for heavy hardcore as they have a weight restriction.",
                bin_bag_capacity: "120–140",
                dimensions: Dimensions {
                    size: Dimension::fixed("14 cu YRDs", "10.7m³"),
                    length: Dimension::fixed("13′", "3.96m"),
                    width: Dimension::fixed("6′", "1.83m"),
                    height: Dimension::fixed("5'9″", "1.75m"),
                },
                category: None,
            },
        ),
        (
            16,
            SkipReference {
                description: "16 yard skips are the largest standard skips available, perfect for major house clearances and large renovation projects. They are not suitable for heavy hardcore due to weight restrictions.",
                bin_bag_capacity: "140–160",
                dimensions: Dimensions {
                    size: Dimension::fixed("16 cu YRDs", "12.2m³"),
                    length: Dimension::fixed("14′", "4.27m"),
                    width: Dimension::fixed("6'3″", "1.91m"),
                    height: Dimension::fixed("6′", "1.83m"),
                },
                category: None,
            },
        ),
        (
            20,
            SkipReference {
                description: "20 yard roll on roll off skips are used for light construction and demolition waste solutions.",
                bin_bag_capacity: "160–200",
                dimensions: Dimensions {
                    size: Dimension::fixed("20 cu YRDs", "15.3m³"),
                    length: Dimension::fixed("19'11\"", "6.07m"),
                    width: Dimension::fixed("7'4″", "2.23m"),
                    height: Dimension::fixed("5'4″", "1.62m"),
                },
                category: Some(SkipCategory::RollOnRollOff),
            },
        ),
        (
            40,
            SkipReference {
                description: "40 yard roll on roll off commercial skips are mostly used for large light waste types. This is the biggest skip we supply.",
                bin_bag_capacity: "350–400",
                dimensions: Dimensions {
                    size: Dimension::fixed("40 cu YRDs", "30.58m³"),
                    length: Dimension::fixed("19'11\"", "6.07m"),
                    width: Dimension::fixed("7'4″", "2.23m"),
                    height: Dimension::fixed("8'10″", "2.69m"),
                },
                category: Some(SkipCategory::RollOnRollOff),
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalogue_covers_standard_and_roro_sizes() {
        let sizes: Vec<u32> = reference_sizes().collect();
        assert_eq!(sizes, vec![4, 6, 8, 10, 12, 14, 16, 20, 40]);
    }

    #[test]
    fn only_exact_sizes_resolve() {
        assert!(reference(8).is_some());
        assert!(reference(7).is_none());
        assert!(reference(0).is_none());
    }

    #[test]
    fn size_dimension_matches_key() {
        for size in reference_sizes() {
            let entry = reference(size).expect("listed size resolves");
            assert_eq!(entry.dimensions.size.imperial, format!("{size} cu YRDs"));
        }
    }

    #[test]
    fn roll_on_roll_off_is_limited_to_largest_sizes() {
        let roro: Vec<u32> = reference_sizes()
            .filter(|size| {
                reference(*size).and_then(|entry| entry.category) == Some(SkipCategory::RollOnRollOff)
            })
            .collect();
        assert_eq!(roro, vec![20, 40]);
    }
}
