//! Absenteeism proration.
//!
//! Unworked days reduce pay by an implied daily salary derived from the
//! net income before deductions: `net / working_days * missed_days`.

use rust_decimal::Decimal;

/// Computes the absenteeism deduction.
///
/// Both day counts must be positive for a deduction to apply; zero,
/// negative or missing (already coerced to zero) values disable the
/// deduction entirely rather than erroring.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_absenteeism;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let net = Decimal::from_str("898.50").unwrap();
/// let deduction = calculate_absenteeism(net, Decimal::from(20), Decimal::from(2));
/// assert_eq!(deduction, Decimal::from_str("89.85").unwrap());
/// ```
pub fn calculate_absenteeism(
    net_before_deductions: Decimal,
    working_days: Decimal,
    missed_days: Decimal,
) -> Decimal {
    if working_days <= Decimal::ZERO || missed_days <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let daily_salary = net_before_deductions / working_days;
    daily_salary * missed_days
}
