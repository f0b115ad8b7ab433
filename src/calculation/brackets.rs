//! Progressive tax bracket walk.
//!
//! Taxable income is consumed bracket by bracket in table order: each
//! bracket taxes `min(remaining, width)` at its marginal rate, and the
//! walk stops as soon as nothing remains. The final bracket of every
//! table is unbounded, so arbitrarily large incomes terminate.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::BracketLine;

/// The result of walking a rate table over a taxable amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketWalkResult {
    /// Total tax accumulated across all consumed brackets, full precision.
    pub total_tax: Decimal,
    /// One line per consumed bracket, in table order.
    pub lines: Vec<BracketLine>,
}

/// Walks the rate table's brackets over the given taxable amount.
///
/// A non-positive `taxable_remaining` produces zero tax and an empty
/// trail. Brackets are consumed strictly in table order; brackets the
/// walk never reaches do not appear in the trail. No rounding happens
/// here — callers round once at the output boundary.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::walk_brackets;
/// use paye_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("config/gh_paye").unwrap();
/// let table = loader.config().table_for_year("2024");
///
/// let result = walk_brackets(Decimal::from_str("890").unwrap(), table);
/// assert_eq!(result.total_tax, Decimal::from_str("46.500").unwrap());
/// assert_eq!(result.lines.len(), 4);
/// ```
pub fn walk_brackets(taxable_remaining: Decimal, table: &RateTable) -> BracketWalkResult {
    let mut remaining = taxable_remaining;
    let mut total_tax = Decimal::ZERO;
    let mut lines = Vec::new();
    let hundred = Decimal::from(100);

    for bracket in &table.brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let amount_taxed = match bracket.width {
            Some(width) if remaining > width => width,
            _ => remaining,
        };
        let tax = bracket.rate * amount_taxed / hundred;

        total_tax += tax;
        lines.push(BracketLine {
            rate: bracket.rate,
            amount_taxed,
            tax,
        });
        remaining -= amount_taxed;
    }

    BracketWalkResult { total_tax, lines }
}
