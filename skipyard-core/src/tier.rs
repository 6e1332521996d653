//! Colour tiers for size labels and the accompanying size guide.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Shade used for a skip's size label.
pub enum SizeTier {
    /// Small domestic skips, 4 to 8 yards.
    Light,
    /// Mid-size skips, 10 to 16 yards, and any uncatalogued size.
    Regular,
    /// Roll on roll off containers, 20 and 40 yards.
    Dark,
}

impl SizeTier {
    /// Tier for a size in yards.
    #[must_use]
    pub fn for_size(size: u32) -> Self {
        match size {
            4..=8 => SizeTier::Light,
            20 | 40 => SizeTier::Dark,
            // 10..=16 and anything uncatalogued
            _ => SizeTier::Regular,
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SizeTier::Light => "light",
            SizeTier::Regular => "regular",
            SizeTier::Dark => "dark",
        };
        formatter.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// One row of the size guide.
pub struct GuideEntry {
    /// Tier the row is coloured with.
    pub tier: SizeTier,
    /// Size range label.
    pub range: &'static str,
    /// Typical jobs for the range.
    pub uses: &'static str,
}

/// Rows of the size guide, smallest sizes first.
#[must_use]
pub const fn size_guide() -> [GuideEntry; 3] {
    [
        GuideEntry {
            tier: SizeTier::Light,
            range: "4-8yd",
            uses: "Home projects, garden clearance",
        },
        GuideEntry {
            tier: SizeTier::Regular,
            range: "10-16yd",
            uses: "Renovations, construction debris",
        },
        GuideEntry {
            tier: SizeTier::Dark,
            range: "20-40yd",
            uses: "Commercial, large construction",
        },
    ]
}
