//! Salary breakdown calculations for the FY 2025-26 new tax regime.

pub mod breakdown;
pub mod common;

pub use breakdown::{BreakdownCalculator, SalaryBreakdown};
