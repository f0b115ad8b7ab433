//! The take-home pay calculation.
//!
//! This is the engine's single entry point: it validates the monetary
//! text fields, resolves the rate table for the requested year, and runs
//! the SSNIT, taxable-base, bracket-walk and absenteeism stages in order,
//! rounding every monetary output once at the end.

use rust_decimal::Decimal;

use crate::config::TaxConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{BracketLine, CalculationInput, SsnitBreakdown, TaxCalculationResult};

use super::absenteeism::calculate_absenteeism;
use super::brackets::walk_brackets;
use super::rounding::round_money;
use super::ssnit::calculate_ssnit;
use super::taxable_base::compose_taxable_base;
use super::validation::{coerce_amount, parse_amount};

/// Calculates monthly take-home pay.
///
/// Validation happens first: gross income, the legacy allowances field
/// and tax relief must each be empty (zero) or a non-negative decimal
/// numeral, otherwise a single [`EngineError::InvalidInput`] is returned
/// and nothing is computed. Line-item values and the day counts are
/// coerced instead, degrading to zero when malformed.
///
/// The calculation is pure: no state survives between invocations and
/// the inputs are never mutated.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_take_home;
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::CalculationInput;
///
/// let loader = ConfigLoader::load("config/gh_paye").unwrap();
/// let mut input = CalculationInput::for_gross("1000");
/// input.year = "2024".to_string();
///
/// let result = calculate_take_home(&input, loader.config()).unwrap();
/// assert_eq!(result.ssnit.to_string(), "55.00");
/// assert_eq!(result.income_tax.to_string(), "46.50");
/// assert_eq!(result.net_income.to_string(), "898.50");
/// ```
pub fn calculate_take_home(
    input: &CalculationInput,
    config: &TaxConfig,
) -> EngineResult<TaxCalculationResult> {
    let (Some(gross), Some(legacy_allowances), Some(tax_relief)) = (
        parse_amount(&input.gross_income),
        parse_amount(&input.allowances),
        parse_amount(&input.tax_relief),
    ) else {
        return Err(EngineError::invalid_amounts());
    };

    let table = config.table_for_year(&input.year);

    let ssnit = calculate_ssnit(gross, config.ssnit(), input.ssnit_enabled);
    let base = compose_taxable_base(
        gross,
        ssnit.employee_contribution,
        tax_relief,
        legacy_allowances,
        &input.allowance_items,
    );
    let walk = walk_brackets(base.taxable_remaining, table);

    // Net income before deductions and absenteeism: gross plus every
    // allowance, minus tax and the employee contribution.
    let net_before = gross
        + legacy_allowances
        + base.taxable_allowances_total
        + base.non_taxable_allowances_total
        - walk.total_tax
        - ssnit.employee_contribution;

    // Deductions reduce net pay after tax regardless of their flag.
    let deductions_total: Decimal = input
        .deductions
        .iter()
        .map(|item| coerce_amount(&item.value))
        .sum();

    let working_days = coerce_amount(&input.working_days);
    let missed_days = coerce_amount(&input.missed_days);
    let absenteeism = calculate_absenteeism(net_before, working_days, missed_days);

    let net_income = net_before - deductions_total - absenteeism;

    Ok(TaxCalculationResult {
        income_tax: round_money(walk.total_tax),
        ssnit: round_money(ssnit.employee_contribution),
        net_income: round_money(net_income),
        computation_breakdown: walk
            .lines
            .into_iter()
            .map(|line| BracketLine {
                rate: line.rate,
                amount_taxed: round_money(line.amount_taxed),
                tax: round_money(line.tax),
            })
            .collect(),
        ssnit_breakdown: SsnitBreakdown {
            employee_contribution: round_money(ssnit.employee_contribution),
            employer_contribution: round_money(ssnit.employer_contribution),
            total_contribution: round_money(ssnit.total_contribution),
            employee_rate: ssnit.employee_rate,
            employer_rate: ssnit.employer_rate,
            base_amount: round_money(ssnit.base_amount),
            tier1: round_money(ssnit.tier1),
            tier2: round_money(ssnit.tier2),
        },
    })
}
