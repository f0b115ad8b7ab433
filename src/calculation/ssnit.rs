//! SSNIT contribution calculation.
//!
//! The mandatory contribution is split between an employee share
//! (withheld from salary) and an employer share (paid on top), and the
//! combined amount is divided into Tier 1 and Tier 2 pension-fund
//! slices. Only the employee share ever reduces take-home pay.

use rust_decimal::Decimal;

use crate::config::SsnitRates;
use crate::models::SsnitBreakdown;

/// Computes the full SSNIT breakdown for a gross income.
///
/// When the scheme is disabled every contribution and tier amount is
/// zero; the configured rates and the gross base are still reported so
/// the breakdown stays self-describing. No rounding happens here.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_ssnit;
/// use paye_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("config/gh_paye").unwrap();
/// let gross = Decimal::from_str("1000").unwrap();
///
/// let breakdown = calculate_ssnit(gross, loader.config().ssnit(), true);
/// assert_eq!(breakdown.employee_contribution, Decimal::from_str("55.000").unwrap());
/// assert_eq!(breakdown.employer_contribution, Decimal::from_str("130.000").unwrap());
/// ```
pub fn calculate_ssnit(gross: Decimal, rates: &SsnitRates, enabled: bool) -> SsnitBreakdown {
    let hundred = Decimal::from(100);

    let (employee, employer) = if enabled {
        (
            gross * rates.employee_rate / hundred,
            gross * rates.employer_rate / hundred,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let total = employee + employer;
    let total_rate = rates.total_rate();
    let tier1 = if total_rate > Decimal::ZERO {
        total * rates.tier1_rate / total_rate
    } else {
        Decimal::ZERO
    };
    let tier2 = total - tier1;

    SsnitBreakdown {
        employee_contribution: employee,
        employer_contribution: employer,
        total_contribution: total,
        employee_rate: rates.employee_rate,
        employer_rate: rates.employer_rate,
        base_amount: gross,
        tier1,
        tier2,
    }
}
