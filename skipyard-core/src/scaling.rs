//! Proportional image sizing for the comparison view.
//!
//! Each skip is drawn relative to the largest skip in the set it is compared
//! against, so the set must be passed in again whenever it changes.

use crate::model::{Dimension, EnrichedSkip};

/// Default height in pixels of the tallest skip.
pub const DEFAULT_BASE_HEIGHT: f64 = 120.0;
/// Default width in pixels of the longest skip.
pub const DEFAULT_BASE_WIDTH: f64 = 200.0;
/// Smallest height a skip is ever drawn at.
pub const MIN_SCALED_HEIGHT: f64 = 50.0;
/// Smallest width a skip is ever drawn at.
pub const MIN_SCALED_WIDTH: f64 = 100.0;

/// Parse the number in a metric measurement such as `1.22m` or `3.06m³`.
///
/// The first `m` is dropped and the longest leading decimal number is read;
/// anything that does not start with a number (e.g. `N/A`) yields `None`.
#[must_use]
pub fn parse_metric(metric: &str) -> Option<f64> {
    let stripped = metric.replacen('m', "", 1);
    let trimmed = stripped.trim_start();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    trimmed.get(..end)?.parse().ok()
}

/// Height to draw `skip` at, scaled by its metric height against the tallest in `all`.
#[must_use]
pub fn scaled_height(skip: &EnrichedSkip, all: &[EnrichedSkip], base_height: f64) -> f64 {
    scale(
        skip,
        all,
        |candidate| &candidate.dimensions.height,
        base_height,
        MIN_SCALED_HEIGHT,
    )
}

/// Width to draw `skip` at, scaled against the longest in `all`.
///
/// Skips are compared by their longest visible side, so this reads the metric
/// *length*, not the width.
#[must_use]
pub fn scaled_width(skip: &EnrichedSkip, all: &[EnrichedSkip], base_width: f64) -> f64 {
    scale(
        skip,
        all,
        |candidate| &candidate.dimensions.length,
        base_width,
        MIN_SCALED_WIDTH,
    )
}

fn scale<F>(skip: &EnrichedSkip, all: &[EnrichedSkip], measure: F, base: f64, floor: f64) -> f64
where
    F: Fn(&EnrichedSkip) -> &Dimension,
{
    let Some(own) = parse_metric(&measure(skip).metric) else {
        return base;
    };

    let largest = all
        .iter()
        .map(|candidate| parse_metric(&measure(candidate).metric).unwrap_or(0.0))
        .fold(0.0_f64, f64::max);

    if largest <= 0.0 {
        return base;
    }

    (base * (own / largest)).max(floor)
}
