//! Configuration types for the tax scheme.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the contribution
//! scheme, the year-keyed PAYE rate tables, and the aggregate
//! [`TaxConfig`] the engine consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// Scheme configuration from `scheme.yaml`.
///
/// Identifies the tax regime, names the default rate-table year, and
/// carries the SSNIT contribution percentages.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeConfig {
    /// The human-readable name of the scheme (e.g. "Ghana PAYE").
    pub name: String,
    /// The authority publishing the rates.
    pub authority: String,
    /// URL to the official rate documentation.
    pub source_url: String,
    /// Year key used when a requested year has no registered table.
    pub default_year: String,
    /// SSNIT contribution rates.
    pub ssnit: SsnitRates,
}

/// SSNIT contribution percentages.
#[derive(Debug, Clone, Deserialize)]
pub struct SsnitRates {
    /// Employee contribution rate in percent, withheld from salary.
    pub employee_rate: Decimal,
    /// Employer contribution rate in percent, paid on top of salary.
    pub employer_rate: Decimal,
    /// Tier 1 share in percent of gross; the pension-fund slice of the
    /// total contribution.
    pub tier1_rate: Decimal,
}

impl SsnitRates {
    /// Returns the combined employee plus employer rate.
    pub fn total_rate(&self) -> Decimal {
        self.employee_rate + self.employer_rate
    }

    /// Checks the percentages for internal consistency.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.employee_rate < Decimal::ZERO || self.employer_rate < Decimal::ZERO {
            return Err("contribution rates must be non-negative".to_string());
        }
        if self.tier1_rate < Decimal::ZERO || self.tier1_rate > self.total_rate() {
            return Err("tier1_rate must lie between zero and the total rate".to_string());
        }
        Ok(())
    }
}

/// A single marginal bracket of a PAYE rate table.
///
/// `width` is the taxable amount the bracket covers; `None` marks the
/// final "everything above" bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The marginal rate in percent applied within this bracket.
    pub rate: Decimal,
    /// The width of the bracket; unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Decimal>,
}

/// A PAYE rate table for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The year key this table is registered under (e.g. "2024").
    pub year: String,
    /// The date the table took effect.
    pub effective_from: NaiveDate,
    /// Marginal brackets, ordered ascending by rate; the last is unbounded.
    pub brackets: Vec<TaxBracket>,
}

impl RateTable {
    /// Checks the bracket invariants: at least one bracket, positive
    /// widths, strictly ascending rates, and exactly the final bracket
    /// unbounded.
    pub(crate) fn validate(&self) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidRateTable {
            year: self.year.clone(),
            message: message.to_string(),
        };

        if self.brackets.is_empty() {
            return Err(invalid("table has no brackets"));
        }

        let last = self.brackets.len() - 1;
        let mut previous_rate: Option<Decimal> = None;
        for (index, bracket) in self.brackets.iter().enumerate() {
            match bracket.width {
                Some(width) if width <= Decimal::ZERO => {
                    return Err(invalid("bracket width must be positive"));
                }
                Some(_) if index == last => {
                    return Err(invalid("final bracket must be unbounded"));
                }
                None if index != last => {
                    return Err(invalid("only the final bracket may be unbounded"));
                }
                _ => {}
            }
            if let Some(previous) = previous_rate {
                if bracket.rate <= previous {
                    return Err(invalid("bracket rates must be strictly ascending"));
                }
            }
            previous_rate = Some(bracket.rate);
        }

        Ok(())
    }
}

/// The complete tax configuration the engine consumes.
///
/// Aggregates the scheme metadata, SSNIT rates and every registered rate
/// table. Lookup by year never fails: unknown keys fall back to the
/// configured default year's table.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Scheme metadata and SSNIT rates.
    scheme: SchemeConfig,
    /// Rate tables keyed by year.
    tables: HashMap<String, RateTable>,
    /// The default table, cloned out so fallback lookup is infallible.
    default_table: RateTable,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts, validating every
    /// table and the presence of the default year.
    pub fn new(scheme: SchemeConfig, tables: Vec<RateTable>) -> EngineResult<Self> {
        let mut by_year = HashMap::new();
        for table in tables {
            table.validate()?;
            let year = table.year.clone();
            if by_year.insert(year.clone(), table).is_some() {
                return Err(EngineError::InvalidRateTable {
                    year,
                    message: "duplicate rate table for year".to_string(),
                });
            }
        }

        let default_table = by_year
            .get(&scheme.default_year)
            .cloned()
            .ok_or_else(|| EngineError::InvalidRateTable {
                year: scheme.default_year.clone(),
                message: "no rate table registered for the default year".to_string(),
            })?;

        Ok(Self {
            scheme,
            tables: by_year,
            default_table,
        })
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeConfig {
        &self.scheme
    }

    /// Returns the SSNIT contribution rates.
    pub fn ssnit(&self) -> &SsnitRates {
        &self.scheme.ssnit
    }

    /// Returns the rate table for the given year key.
    ///
    /// An unknown year is not an error: the table for the configured
    /// default year is returned instead.
    pub fn table_for_year(&self, year: &str) -> &RateTable {
        self.tables.get(year).unwrap_or(&self.default_table)
    }

    /// Returns all registered year keys, sorted ascending.
    pub fn years(&self) -> Vec<&str> {
        let mut years: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        years.sort_unstable();
        years
    }
}
