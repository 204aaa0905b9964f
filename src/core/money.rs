use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every monetary amount in a response
pub const AMOUNT_SCALE: u32 = 2;

/// Round a binary-float amount to cents.
///
/// The exact binary value is lifted into a `Decimal` and rounded half-to-even, so
/// `2.675` (stored as 2.67499999...) becomes `2.67` and `0.125` becomes `0.12`.
/// Values outside the `Decimal` range are already integral at cent resolution and
/// are returned as-is.
pub fn round_amount(value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    let rounded = exact.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven);

    // Parsing the decimal text yields the nearest f64
    rounded.to_string().parse().unwrap_or(value)
}

/// Whole-number percentage for a rate expressed as a fraction of one (0.19 -> 19).
///
/// Truncates, so a rate with sub-percent precision loses the fraction.
/// `None` when the percentage does not fit in `0..=255`.
pub fn rate_to_percent(rate: Decimal) -> Option<u8> {
    (rate * Decimal::ONE_HUNDRED).trunc().to_u8()
}

/// Rate as a binary float, for multiplying against request amounts
pub fn rate_to_f64(rate: Decimal) -> Option<f64> {
    rate.to_f64()
}
