//! Domain data structures for skip listings and their enriched display form.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Postcode used when no location is given.
pub const DEFAULT_POSTCODE: &str = "NR32";
/// Area used when no location is given.
pub const DEFAULT_AREA: &str = "Lowestoft";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Location that skip listings are requested for.
pub struct Location {
    /// Postcode district, e.g. `NR32`.
    pub postcode: String,
    /// Town or area name, e.g. `Lowestoft`.
    pub area: String,
}

impl Location {
    /// Construct a location from a postcode and an area.
    #[must_use]
    pub fn new<P: Into<String>, A: Into<String>>(postcode: P, area: A) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_POSTCODE, DEFAULT_AREA)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.area.is_empty() {
            write!(formatter, "{}", self.postcode)
        } else {
            write!(formatter, "{} ({})", self.area, self.postcode)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier of a skip listing as assigned by the upstream source.
pub struct SkipId(pub u64);

impl fmt::Display for SkipId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Skip listing exactly as delivered by the upstream source.
pub struct RawSkip {
    /// Listing identifier.
    pub id: SkipId,
    /// Capacity in cubic yards.
    pub size: u32,
    /// Included hire period in days.
    pub hire_period_days: u32,
    /// Flat transport cost, when the listing charges one.
    pub transport_cost: Option<f64>,
    /// Cost per tonne of waste, when the listing charges one.
    pub per_tonne_cost: Option<f64>,
    /// Price in pounds before VAT.
    pub price_before_vat: f64,
    /// VAT rate in percent.
    pub vat: f64,
    /// Postcode the listing applies to.
    pub postcode: String,
    /// Area the listing applies to; often empty or null.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub area: String,
    /// Listing is not available for booking.
    pub forbidden: bool,
    /// Creation timestamp of the listing, as sent.
    pub created_at: String,
    /// Last update timestamp of the listing, as sent.
    pub updated_at: String,
    /// Skip may be placed on a public road (with permit).
    pub allowed_on_road: bool,
    /// Skip accepts heavy waste such as soil or rubble.
    pub allows_heavy_waste: bool,
}

impl RawSkip {
    /// When the listing was last updated, if the timestamp is readable.
    #[must_use]
    pub fn last_updated(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.updated_at)
    }
}

/// Parse an upstream timestamp, with or without a UTC offset.
///
/// Offset timestamps are converted to UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|stamp| stamp.naive_utc())
        .ok()
        .or_else(|| trimmed.parse::<NaiveDateTime>().ok())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A measurement given in both imperial and metric notation.
pub struct Dimension {
    /// Imperial notation, e.g. `5'11"`.
    pub imperial: Cow<'static, str>,
    /// Metric notation, e.g. `1.80m`.
    pub metric: Cow<'static, str>,
}

/// Placeholder used for unknown measurements.
pub const NOT_AVAILABLE: &str = "N/A";

impl Dimension {
    /// Measurement backed by static strings.
    #[must_use]
    pub const fn fixed(imperial: &'static str, metric: &'static str) -> Self {
        Self {
            imperial: Cow::Borrowed(imperial),
            metric: Cow::Borrowed(metric),
        }
    }

    /// Measurement that is unknown in both notations.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::fixed(NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Volume and outer measurements of a skip.
pub struct Dimensions {
    /// Volume.
    pub size: Dimension,
    /// Outer length.
    pub length: Dimension,
    /// Outer width.
    pub width: Dimension,
    /// Outer height.
    pub height: Dimension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Skip construction category.
pub enum SkipCategory {
    /// Regular lifted skip.
    #[serde(rename = "Standard")]
    Standard,
    /// Roll on roll off container for the largest sizes.
    #[serde(rename = "Roll on roll off")]
    RollOnRollOff,
}

impl SkipCategory {
    /// Human readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SkipCategory::Standard => "Standard",
            SkipCategory::RollOnRollOff => "Roll on roll off",
        }
    }
}

impl fmt::Display for SkipCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Kinds of waste a skip is suitable for.
pub enum Suitability {
    /// Garden clippings and green waste.
    #[serde(rename = "Garden waste")]
    GardenWaste,
    /// Household clear outs.
    #[serde(rename = "Home clearance")]
    HomeClearance,
    /// Kitchen, bathroom and similar refits.
    #[serde(rename = "Renovation waste")]
    RenovationWaste,
    /// Rubble and building debris.
    #[serde(rename = "Construction debris")]
    ConstructionDebris,
    /// Business waste.
    #[serde(rename = "Commercial waste")]
    CommercialWaste,
    /// Large building sites.
    #[serde(rename = "Large construction")]
    LargeConstruction,
    /// Soil, concrete, bricks and other dense material.
    #[serde(rename = "Heavy materials")]
    HeavyMaterials,
}

impl Suitability {
    /// Human readable tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Suitability::GardenWaste => "Garden waste",
            Suitability::HomeClearance => "Home clearance",
            Suitability::RenovationWaste => "Renovation waste",
            Suitability::ConstructionDebris => "Construction debris",
            Suitability::CommercialWaste => "Commercial waste",
            Suitability::LargeConstruction => "Large construction",
            Suitability::HeavyMaterials => "Heavy materials",
        }
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Image assets picked for a skip together with their intrinsic size in pixels.
pub struct SkipImage {
    /// Path of the schematic drawing.
    pub schematic: &'static str,
    /// Path of the photo-style rendering.
    pub realistic: &'static str,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Display-ready skip: the raw listing plus reference data and derived fields.
pub struct EnrichedSkip {
    /// Upstream listing, unchanged.
    #[serde(flatten)]
    pub raw: RawSkip,
    /// Suitability tags in display order.
    pub suitable: Vec<Suitability>,
    /// Image assets for the listing.
    pub image: SkipImage,
    /// Marketing description.
    pub description: Cow<'static, str>,
    /// Approximate capacity in bin bags, e.g. `60–80`.
    pub bin_bag_capacity: Cow<'static, str>,
    /// Volume and outer measurements.
    pub dimensions: Dimensions,
    /// Construction category when the catalogue names one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<SkipCategory>,
}

impl EnrichedSkip {
    /// Listing identifier.
    #[must_use]
    pub fn id(&self) -> SkipId {
        self.raw.id
    }

    /// Capacity in cubic yards.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.raw.size
    }
}
