//! Numeric value generators.

use rand::Rng;
use std::ops::Range;

/// Identifiers are drawn from this range and may repeat.
pub const IDENTIFIER_RANGE: Range<i64> = 0..10_000;

/// Discount percentages are drawn from this range.
pub const DISCOUNT_RANGE: Range<i64> = 2..40;

/// Valid quantities before defect sentinels are added.
pub const QUANTITY_RANGE: Range<i64> = 2..20;

/// Generate a sale identifier.
pub fn generate_identifier<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(IDENTIFIER_RANGE)
}

/// Generate a discount percentage.
pub fn generate_discount<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(DISCOUNT_RANGE)
}
