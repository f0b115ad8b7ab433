//! Allowance and deduction line items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single allowance or deduction entered by the caller.
///
/// The `value` field is kept as raw text: callers hand over whatever the
/// user typed (possibly with thousands separators), and the engine
/// coerces it defensively, treating anything unparseable as zero. For
/// allowances the `taxable` flag decides whether the amount enters the
/// taxable base; deductions always reduce net pay after tax, so for them
/// the flag is stored but not consulted.
///
/// Items are owned and managed by the caller (created with a fresh id,
/// edited or removed by id); the engine only ever reads them.
///
/// # Example
///
/// ```
/// use paye_engine::models::LineItem;
///
/// let bonus = LineItem::new("Fuel allowance", "250.00", true);
/// assert!(bonus.taxable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier for the item.
    pub id: Uuid,
    /// Display label for the item.
    pub label: String,
    /// The monetary amount as raw text; coerced to zero when invalid.
    pub value: String,
    /// Whether the amount enters the taxable base (allowances only).
    pub taxable: bool,
}

impl LineItem {
    /// Creates a new line item with a fresh id.
    pub fn new(label: impl Into<String>, value: impl Into<String>, taxable: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            value: value.into(),
            taxable,
        }
    }
}
