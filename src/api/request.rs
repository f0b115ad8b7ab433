//! Request types for the PAYE engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CalculationInput, LineItem};

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional: monetary text fields default to empty (zero),
/// SSNIT defaults to enabled, and an empty or unknown year selects the
/// default rate table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross basic monthly income.
    #[serde(default)]
    pub gross_income: String,
    /// Legacy single-field allowance total, always taxable.
    #[serde(default)]
    pub allowances: String,
    /// User-entered tax relief.
    #[serde(default)]
    pub tax_relief: String,
    /// Whether SSNIT contributions apply.
    #[serde(default = "default_ssnit_enabled")]
    pub ssnit_enabled: bool,
    /// Tax-year key selecting the rate table.
    #[serde(default)]
    pub year: String,
    /// Itemized allowances.
    #[serde(default)]
    pub allowance_items: Vec<LineItemRequest>,
    /// Itemized deductions.
    #[serde(default)]
    pub deductions: Vec<LineItemRequest>,
    /// Working days in the month.
    #[serde(default)]
    pub working_days: String,
    /// Unworked days to deduct pay for.
    #[serde(default)]
    pub missed_days: String,
}

fn default_ssnit_enabled() -> bool {
    true
}

/// An allowance or deduction item in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Unique identifier; a fresh id is generated when omitted.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display label for the item.
    #[serde(default)]
    pub label: String,
    /// The monetary amount as raw text.
    pub value: String,
    /// Whether the amount enters the taxable base (allowances only).
    #[serde(default)]
    pub taxable: bool,
}

impl From<LineItemRequest> for LineItem {
    fn from(req: LineItemRequest) -> Self {
        LineItem {
            id: req.id,
            label: req.label,
            value: req.value,
            taxable: req.taxable,
        }
    }
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            gross_income: req.gross_income,
            allowances: req.allowances,
            tax_relief: req.tax_relief,
            ssnit_enabled: req.ssnit_enabled,
            year: req.year,
            allowance_items: req.allowance_items.into_iter().map(Into::into).collect(),
            deductions: req.deductions.into_iter().map(Into::into).collect(),
            working_days: req.working_days,
            missed_days: req.missed_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "gross_income": "1000",
            "allowances": "0",
            "tax_relief": "0",
            "ssnit_enabled": true,
            "year": "2024",
            "allowance_items": [
                { "label": "Fuel", "value": "100", "taxable": true }
            ],
            "deductions": [
                { "label": "Loan", "value": "50" }
            ],
            "working_days": "20",
            "missed_days": "2"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.gross_income, "1000");
        assert_eq!(request.year, "2024");
        assert_eq!(request.allowance_items.len(), 1);
        assert!(request.allowance_items[0].taxable);
        assert!(!request.deductions[0].taxable);
    }

    #[test]
    fn test_minimal_request_uses_defaults() {
        let request: CalculationRequest = serde_json::from_str(r#"{"gross_income":"500"}"#).unwrap();
        assert!(request.ssnit_enabled);
        assert!(request.year.is_empty());
        assert!(request.allowances.is_empty());
        assert!(request.allowance_items.is_empty());
        assert!(request.working_days.is_empty());
    }

    #[test]
    fn test_item_without_id_gets_fresh_one() {
        let a: LineItemRequest = serde_json::from_str(r#"{"value":"10"}"#).unwrap();
        let b: LineItemRequest = serde_json::from_str(r#"{"value":"10"}"#).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_conversion_to_input() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{
                "gross_income": "1000",
                "deductions": [{ "label": "Dues", "value": "35", "taxable": true }]
            }"#,
        )
        .unwrap();

        let input: CalculationInput = request.into();
        assert_eq!(input.gross_income, "1000");
        assert_eq!(input.deductions.len(), 1);
        assert_eq!(input.deductions[0].label, "Dues");
        assert!(input.deductions[0].taxable);
    }
}
