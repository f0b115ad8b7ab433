//! Core data models for the PAYE calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod input;
mod line_item;

pub use calculation_result::{BracketLine, SsnitBreakdown, TaxCalculationResult};
pub use input::CalculationInput;
pub use line_item::LineItem;
