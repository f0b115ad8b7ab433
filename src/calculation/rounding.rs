//! Boundary rounding for monetary outputs.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value half-up to two decimal places.
///
/// The result is rescaled to scale 2 so it always renders with two
/// places (`898.5` becomes `"898.50"`). Applied exactly once, when a
/// result is assembled; intermediate arithmetic must stay unrounded.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("898.5").unwrap()).to_string(), "898.50");
/// assert_eq!(round_money(Decimal::from_str("0.005").unwrap()).to_string(), "0.01");
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
