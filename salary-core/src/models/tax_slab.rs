use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a marginal income-tax schedule.
///
/// The marginal `rate` applies to income strictly above `lower_bound` and at
/// or below `upper_bound`; the top slab is open-ended (`upper_bound: None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}
