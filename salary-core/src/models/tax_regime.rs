use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxSlab;

/// Errors raised when a tax regime fails structural validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxRegimeError {
    /// The slab schedule is empty.
    #[error("tax schedule has no slabs")]
    EmptySlabTable,

    /// The first slab does not start at zero income.
    #[error("first slab must start at zero, got {0}")]
    FirstSlabNotAtZero(Decimal),

    /// A slab's lower bound does not meet the previous slab's upper bound.
    #[error("slab after {expected} starts at {found}, leaving a gap or overlap")]
    NonContiguousSlabs { expected: Decimal, found: Decimal },

    /// A slab other than the last one is open-ended.
    #[error("only the last slab may be open-ended")]
    UnboundedInnerSlab,

    /// The last slab has an upper bound, leaving high incomes uncovered.
    #[error("last slab must be open-ended, got upper bound {0}")]
    BoundedLastSlab(Decimal),

    /// A slab rate is outside [0, 1].
    #[error("slab rate must be between 0 and 1, got {0}")]
    InvalidSlabRate(Decimal),

    /// The provident fund contribution rate is outside [0, 1].
    #[error("provident fund rate must be between 0 and 1, got {0}")]
    InvalidPfRate(Decimal),

    /// The assumed Basic+DA share of CTC is outside [0, 1].
    #[error("basic pay factor must be between 0 and 1, got {0}")]
    InvalidBasicPayFactor(Decimal),

    /// The cess rate is outside [0, 1].
    #[error("cess rate must be between 0 and 1, got {0}")]
    InvalidCessRate(Decimal),

    /// The provident fund wage ceiling is not positive.
    #[error("provident fund wage ceiling must be positive, got {0}")]
    InvalidPfWageCeiling(Decimal),

    /// The standard deduction is negative.
    #[error("standard deduction must be non-negative, got {0}")]
    NegativeStandardDeduction(Decimal),

    /// The rebate threshold is negative.
    #[error("rebate threshold must be non-negative, got {0}")]
    NegativeRebateThreshold(Decimal),

    /// The rebate cap is negative.
    #[error("rebate cap must be non-negative, got {0}")]
    NegativeRebateCap(Decimal),
}

/// The fixed constants and slab schedule of one income-tax regime.
///
/// All amounts are annual rupee figures. The built-in schedule is the
/// FY 2025-26 new regime; see [`TaxRegime::fy_2025_26`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegime {
    /// Flat deduction for salaried individuals, subtracted from gross
    /// income before the slab schedule applies.
    pub standard_deduction: Decimal,

    /// Assumed Basic+DA share of CTC used for the PF estimate.
    ///
    /// A common industry approximation, not a statutory rule; the precise
    /// split depends on the employer's compensation structure.
    pub basic_pay_factor: Decimal,

    /// Employee provident fund contribution rate applied to Basic+DA.
    pub pf_rate: Decimal,

    /// Statutory annual wage ceiling for the PF contribution base.
    pub pf_wage_ceiling: Decimal,

    /// Taxable income at or below which the Section 87A rebate applies.
    pub rebate_threshold: Decimal,

    /// Maximum rebate amount subtracted from slab tax under the threshold.
    pub rebate_cap: Decimal,

    /// Health and education cess levied on the post-rebate tax.
    pub cess_rate: Decimal,

    /// Marginal slab schedule, ordered from the lowest band up.
    pub slabs: Vec<TaxSlab>,
}

impl TaxRegime {
    /// The FY 2025-26 new-regime schedule.
    ///
    /// Standard deduction of 75,000, a 60,000 rebate for taxable income up
    /// to 12 lakh, 4% cess, and seven marginal slabs from 0% to 30%.
    pub fn fy_2025_26() -> Self {
        Self {
            standard_deduction: Decimal::from(75_000),
            basic_pay_factor: Decimal::new(50, 2),
            pf_rate: Decimal::new(12, 2),
            pf_wage_ceiling: Decimal::from(180_000),
            rebate_threshold: Decimal::from(1_200_000),
            rebate_cap: Decimal::from(60_000),
            cess_rate: Decimal::new(4, 2),
            slabs: vec![
                TaxSlab {
                    lower_bound: Decimal::ZERO,
                    upper_bound: Some(Decimal::from(400_000)),
                    rate: Decimal::ZERO,
                },
                TaxSlab {
                    lower_bound: Decimal::from(400_000),
                    upper_bound: Some(Decimal::from(800_000)),
                    rate: Decimal::new(5, 2),
                },
                TaxSlab {
                    lower_bound: Decimal::from(800_000),
                    upper_bound: Some(Decimal::from(1_200_000)),
                    rate: Decimal::new(10, 2),
                },
                TaxSlab {
                    lower_bound: Decimal::from(1_200_000),
                    upper_bound: Some(Decimal::from(1_600_000)),
                    rate: Decimal::new(15, 2),
                },
                TaxSlab {
                    lower_bound: Decimal::from(1_600_000),
                    upper_bound: Some(Decimal::from(2_000_000)),
                    rate: Decimal::new(20, 2),
                },
                TaxSlab {
                    lower_bound: Decimal::from(2_000_000),
                    upper_bound: Some(Decimal::from(2_400_000)),
                    rate: Decimal::new(25, 2),
                },
                TaxSlab {
                    lower_bound: Decimal::from(2_400_000),
                    upper_bound: None,
                    rate: Decimal::new(30, 2),
                },
            ],
        }
    }

    /// Validates the regime's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TaxRegimeError`] if:
    /// - the slab schedule is empty, does not start at zero, has a gap or
    ///   overlap between adjacent slabs, has an open-ended slab before the
    ///   last position, or has a bounded last slab
    /// - any slab rate, the PF rate, the basic pay factor, or the cess rate
    ///   is outside [0, 1]
    /// - the PF wage ceiling is not positive
    /// - the standard deduction, rebate threshold, or rebate cap is negative
    pub fn validate(&self) -> Result<(), TaxRegimeError> {
        let Some(first) = self.slabs.first() else {
            return Err(TaxRegimeError::EmptySlabTable);
        };
        if !first.lower_bound.is_zero() {
            return Err(TaxRegimeError::FirstSlabNotAtZero(first.lower_bound));
        }
        for (idx, slab) in self.slabs.iter().enumerate() {
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return Err(TaxRegimeError::InvalidSlabRate(slab.rate));
            }
            let is_last = idx + 1 == self.slabs.len();
            match slab.upper_bound {
                Some(upper) if is_last => {
                    return Err(TaxRegimeError::BoundedLastSlab(upper));
                }
                Some(upper) => {
                    let next = &self.slabs[idx + 1];
                    if next.lower_bound != upper {
                        return Err(TaxRegimeError::NonContiguousSlabs {
                            expected: upper,
                            found: next.lower_bound,
                        });
                    }
                }
                None if !is_last => {
                    return Err(TaxRegimeError::UnboundedInnerSlab);
                }
                None => {}
            }
        }
        if self.pf_rate < Decimal::ZERO || self.pf_rate > Decimal::ONE {
            return Err(TaxRegimeError::InvalidPfRate(self.pf_rate));
        }
        if self.basic_pay_factor < Decimal::ZERO || self.basic_pay_factor > Decimal::ONE {
            return Err(TaxRegimeError::InvalidBasicPayFactor(self.basic_pay_factor));
        }
        if self.cess_rate < Decimal::ZERO || self.cess_rate > Decimal::ONE {
            return Err(TaxRegimeError::InvalidCessRate(self.cess_rate));
        }
        if self.pf_wage_ceiling <= Decimal::ZERO {
            return Err(TaxRegimeError::InvalidPfWageCeiling(self.pf_wage_ceiling));
        }
        if self.standard_deduction < Decimal::ZERO {
            return Err(TaxRegimeError::NegativeStandardDeduction(
                self.standard_deduction,
            ));
        }
        if self.rebate_threshold < Decimal::ZERO {
            return Err(TaxRegimeError::NegativeRebateThreshold(
                self.rebate_threshold,
            ));
        }
        if self.rebate_cap < Decimal::ZERO {
            return Err(TaxRegimeError::NegativeRebateCap(self.rebate_cap));
        }
        Ok(())
    }
}
