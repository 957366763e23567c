//! Shared helpers for money arithmetic.

use rust_decimal::Decimal;

/// Rounds a rupee amount to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, following standard
/// financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(7227.204)), dec!(7227.20));
/// assert_eq!(round_half_up(dec!(7227.205)), dec!(7227.21));
/// assert_eq!(round_half_up(dec!(21600)), dec!(21600.00));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::max;
///
/// assert_eq!(max(dec!(0.00), dec!(26500.00)), dec!(26500.00));
/// assert_eq!(max(dec!(-33500.00), dec!(0.00)), dec!(0.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
