pub mod calculations;
pub mod models;

pub use calculations::{BreakdownCalculator, SalaryBreakdown};
pub use models::*;
