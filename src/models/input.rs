//! Input to a take-home pay calculation.

use serde::{Deserialize, Serialize};

use super::LineItem;

/// Everything a take-home calculation consumes.
///
/// The three monetary text fields (`gross_income`, `allowances`,
/// `tax_relief`) are validated strictly: empty text counts as zero, and
/// anything that is not a non-negative decimal numeral fails the whole
/// calculation. Item values and the day counts are coerced defensively
/// instead, so a malformed item degrades to zero rather than erroring.
///
/// `allowances` is the legacy single-field allowance total; it is always
/// treated as taxable. Itemized allowances carry their own flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Gross basic monthly income.
    pub gross_income: String,
    /// Legacy single-field allowance total, always taxable.
    pub allowances: String,
    /// User-entered tax relief, offset against the taxable base.
    pub tax_relief: String,
    /// Whether SSNIT contributions apply.
    pub ssnit_enabled: bool,
    /// Tax-year key selecting the rate table; unknown keys use the
    /// default year.
    pub year: String,
    /// Itemized allowances.
    pub allowance_items: Vec<LineItem>,
    /// Itemized deductions, applied after tax.
    pub deductions: Vec<LineItem>,
    /// Working days in the month, for absenteeism proration.
    pub working_days: String,
    /// Unworked days to deduct pay for.
    pub missed_days: String,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            gross_income: String::new(),
            allowances: String::new(),
            tax_relief: String::new(),
            ssnit_enabled: true,
            year: String::new(),
            allowance_items: Vec::new(),
            deductions: Vec::new(),
            working_days: String::new(),
            missed_days: String::new(),
        }
    }
}

impl CalculationInput {
    /// Creates an input for the given gross income with every other field
    /// at its default.
    pub fn for_gross(gross_income: impl Into<String>) -> Self {
        Self {
            gross_income: gross_income.into(),
            ..Self::default()
        }
    }
}
