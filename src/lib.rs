//! PAYE and SSNIT calculation engine for Ghana payroll.
//!
//! This crate computes an employee's monthly take-home pay under Ghana's
//! progressive PAYE income tax and tiered SSNIT social security scheme,
//! given gross income, allowances, deductions, tax relief, absenteeism
//! and a year-keyed rate table.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
