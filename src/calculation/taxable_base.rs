//! Taxable-base composition.
//!
//! Builds the amount the progressive brackets are walked over: gross
//! income less the employee SSNIT share, plus taxable allowances, less
//! total relief, plus the legacy allowances field (always taxable).

use rust_decimal::Decimal;

use crate::models::LineItem;

use super::validation::coerce_amount;

/// The composed taxable base plus the allowance aggregates needed later
/// for net-income assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxableBaseResult {
    /// The amount handed to the bracket walk; may be negative.
    pub taxable_remaining: Decimal,
    /// Sum of taxable-flagged allowance items.
    pub taxable_allowances_total: Decimal,
    /// Sum of non-taxable allowance items; excluded from the base but
    /// added back into net income.
    pub non_taxable_allowances_total: Decimal,
}

/// Composes the taxable base from gross income, reliefs and allowances.
///
/// The employee SSNIT share is subtracted from the base directly and
/// again as part of the relief total, so it reduces the base twice.
/// That mirrors the long-standing production behavior and is left for a
/// domain expert to confirm; see DESIGN.md.
pub fn compose_taxable_base(
    gross_income: Decimal,
    employee_ssnit: Decimal,
    tax_relief: Decimal,
    legacy_allowances: Decimal,
    allowance_items: &[LineItem],
) -> TaxableBaseResult {
    let mut taxable_allowances_total = Decimal::ZERO;
    let mut non_taxable_allowances_total = Decimal::ZERO;
    for item in allowance_items {
        let amount = coerce_amount(&item.value);
        if item.taxable {
            taxable_allowances_total += amount;
        } else {
            non_taxable_allowances_total += amount;
        }
    }

    let taxable_base = gross_income - employee_ssnit + taxable_allowances_total;
    let total_relief = employee_ssnit + tax_relief;
    let taxable_remaining = taxable_base - total_relief + legacy_allowances;

    TaxableBaseResult {
        taxable_remaining,
        taxable_allowances_total,
        non_taxable_allowances_total,
    }
}
