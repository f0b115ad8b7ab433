//! Calculation result models for the PAYE engine.
//!
//! This module contains the [`TaxCalculationResult`] type and its
//! associated structures: the per-bracket computation trail and the SSNIT
//! contribution breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One consumed bracket in the progressive tax walk.
///
/// Brackets appear in table order (lowest rate first); brackets the walk
/// never reached, or that taxed a zero amount, are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketLine {
    /// The marginal rate in percent for this bracket.
    pub rate: Decimal,
    /// The slice of taxable income consumed by this bracket.
    pub amount_taxed: Decimal,
    /// The tax charged on that slice.
    pub tax: Decimal,
}

/// Breakdown of the SSNIT contribution for one calculation.
///
/// Only the employee contribution reduces net income; the employer share
/// and the tier split are informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsnitBreakdown {
    /// The share withheld from the employee's salary.
    pub employee_contribution: Decimal,
    /// The share paid by the employer on top of salary.
    pub employer_contribution: Decimal,
    /// Employee plus employer contribution.
    pub total_contribution: Decimal,
    /// The employee rate in percent.
    pub employee_rate: Decimal,
    /// The employer rate in percent.
    pub employer_rate: Decimal,
    /// The gross income the contribution was computed from.
    pub base_amount: Decimal,
    /// Tier 1 pension-fund slice of the total contribution.
    pub tier1: Decimal,
    /// Tier 2 slice; the remainder after Tier 1.
    pub tier2: Decimal,
}

/// The complete result of a take-home pay calculation.
///
/// Every monetary field is rounded half-up to two decimal places when the
/// result is assembled; the string serialization therefore always renders
/// two places (e.g. `"898.50"`).
///
/// # Example
///
/// ```
/// use paye_engine::models::{SsnitBreakdown, TaxCalculationResult};
/// use rust_decimal::Decimal;
///
/// let result = TaxCalculationResult {
///     income_tax: Decimal::ZERO,
///     ssnit: Decimal::ZERO,
///     net_income: Decimal::ZERO,
///     computation_breakdown: vec![],
///     ssnit_breakdown: SsnitBreakdown {
///         employee_contribution: Decimal::ZERO,
///         employer_contribution: Decimal::ZERO,
///         total_contribution: Decimal::ZERO,
///         employee_rate: Decimal::ZERO,
///         employer_rate: Decimal::ZERO,
///         base_amount: Decimal::ZERO,
///         tier1: Decimal::ZERO,
///         tier2: Decimal::ZERO,
///     },
/// };
/// assert!(result.computation_breakdown.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Total PAYE income tax across all consumed brackets.
    pub income_tax: Decimal,
    /// The employee SSNIT contribution withheld from pay.
    pub ssnit: Decimal,
    /// Take-home pay after tax, contributions, deductions and absenteeism.
    pub net_income: Decimal,
    /// Per-bracket computation trail, lowest rate first.
    pub computation_breakdown: Vec<BracketLine>,
    /// Full SSNIT contribution breakdown.
    pub ssnit_breakdown: SsnitBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> SsnitBreakdown {
        SsnitBreakdown {
            employee_contribution: dec("55.00"),
            employer_contribution: dec("130.00"),
            total_contribution: dec("185.00"),
            employee_rate: dec("5.5"),
            employer_rate: dec("13.0"),
            base_amount: dec("1000.00"),
            tier1: dec("135.00"),
            tier2: dec("50.00"),
        }
    }

    #[test]
    fn test_monetary_fields_serialize_as_strings() {
        let result = TaxCalculationResult {
            income_tax: dec("46.50"),
            ssnit: dec("55.00"),
            net_income: dec("898.50"),
            computation_breakdown: vec![BracketLine {
                rate: dec("0"),
                amount_taxed: dec("490.00"),
                tax: dec("0.00"),
            }],
            ssnit_breakdown: sample_breakdown(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"income_tax\":\"46.50\""));
        assert!(json.contains("\"ssnit\":\"55.00\""));
        assert!(json.contains("\"net_income\":\"898.50\""));
        assert!(json.contains("\"amount_taxed\":\"490.00\""));
    }

    #[test]
    fn test_result_deserialization() {
        let json = r#"{
            "income_tax": "46.50",
            "ssnit": "55.00",
            "net_income": "898.50",
            "computation_breakdown": [
                { "rate": "0", "amount_taxed": "490.00", "tax": "0.00" },
                { "rate": "5", "amount_taxed": "110.00", "tax": "5.50" }
            ],
            "ssnit_breakdown": {
                "employee_contribution": "55.00",
                "employer_contribution": "130.00",
                "total_contribution": "185.00",
                "employee_rate": "5.5",
                "employer_rate": "13.0",
                "base_amount": "1000.00",
                "tier1": "135.00",
                "tier2": "50.00"
            }
        }"#;

        let result: TaxCalculationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.income_tax, dec("46.50"));
        assert_eq!(result.computation_breakdown.len(), 2);
        assert_eq!(result.computation_breakdown[1].tax, dec("5.50"));
        assert_eq!(result.ssnit_breakdown.tier1, dec("135.00"));
    }

    #[test]
    fn test_tiers_sum_to_total() {
        let breakdown = sample_breakdown();
        assert_eq!(
            breakdown.tier1 + breakdown.tier2,
            breakdown.total_contribution
        );
    }
}
