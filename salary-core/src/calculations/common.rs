//! Rounding helpers shared by anything that displays calculated amounts.
//!
//! The deduction engine itself never rounds; these are applied at the edge.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole won, ties to even.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_won;
///
/// assert_eq!(round_won(dec!(27246.87)), dec!(27247));
/// assert_eq!(round_won(dec!(2.5)), dec!(2));
/// assert_eq!(round_won(dec!(3.5)), dec!(4));
/// ```
pub fn round_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a rate to `places` decimal places, ties away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(0.0709), 3), dec!(0.071));
/// assert_eq!(round_rate(dec!(0.1281), 3), dec!(0.128));
/// ```
pub fn round_rate(
    value: Decimal,
    places: u32,
) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_won tests
    // =========================================================================

    #[test]
    fn round_won_rounds_down_below_midpoint() {
        assert_eq!(round_won(dec!(135000.49)), dec!(135000));
    }

    #[test]
    fn round_won_rounds_up_above_midpoint() {
        assert_eq!(round_won(dec!(27246.87)), dec!(27247));
    }

    #[test]
    fn round_won_ties_go_to_even() {
        assert_eq!(round_won(dec!(10.5)), dec!(10));
        assert_eq!(round_won(dec!(11.5)), dec!(12));
    }

    #[test]
    fn round_won_handles_negative_values() {
        assert_eq!(round_won(dec!(-12000.6)), dec!(-12001));
    }

    // =========================================================================
    // round_rate tests
    // =========================================================================

    #[test]
    fn round_rate_keeps_requested_places() {
        assert_eq!(round_rate(dec!(0.045), 3), dec!(0.045));
        assert_eq!(round_rate(dec!(0.06), 2), dec!(0.06));
    }

    #[test]
    fn round_rate_rounds_midpoint_up() {
        assert_eq!(round_rate(dec!(0.0125), 3), dec!(0.013));
    }
}
