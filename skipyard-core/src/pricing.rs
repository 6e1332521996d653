//! VAT arithmetic shown on the detail sheet and in comparisons.

use crate::model::RawSkip;

/// VAT charged on a listing, rounded to whole pounds.
#[must_use]
pub fn vat_amount(skip: &RawSkip) -> f64 {
    (skip.price_before_vat * (skip.vat / 100.0)).round()
}

/// Price including VAT.
#[must_use]
pub fn total_price(skip: &RawSkip) -> f64 {
    skip.price_before_vat + vat_amount(skip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::raw_skip;

    #[test]
    fn vat_is_rounded_to_whole_pounds() {
        let mut skip = raw_skip(1, 8, false);
        skip.price_before_vat = 278.0;
        skip.vat = 20.0;
        assert!((vat_amount(&skip) - 56.0).abs() < f64::EPSILON);
        assert!((total_price(&skip) - 334.0).abs() < f64::EPSILON);

        skip.price_before_vat = 311.0;
        assert!((vat_amount(&skip) - 62.0).abs() < f64::EPSILON);

        skip.price_before_vat = 2.5;
        skip.vat = 100.0;
        assert!((vat_amount(&skip) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_rate_adds_nothing() {
        let mut skip = raw_skip(1, 8, false);
        skip.vat = 0.0;
        assert!((total_price(&skip) - skip.price_before_vat).abs() < f64::EPSILON);
    }
}
