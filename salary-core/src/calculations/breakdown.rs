//! Cost-to-company breakdown under the FY 2025-26 Indian new tax regime.
//!
//! This module converts an annual CTC figure into a full deduction, tax,
//! and take-home breakdown, both annual and monthly.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Employee PF: 12% of assumed Basic+DA (50% of CTC), capped at the statutory wage ceiling |
//! | 2    | Taxable income: CTC − PF − standard deduction, floored at zero |
//! | 3    | Slab tax: marginal rates applied band by band over the schedule |
//! | 4    | Section 87A rebate: up to 60,000 off for taxable income ≤ 12 lakh |
//! | 5    | Health and education cess: 4% on the post-rebate tax |
//! | 6    | Net pay: CTC − total tax − PF |
//! | 7    | Monthly figures: CTC, PF, total tax, and net pay each ÷ 12 |
//!
//! Surcharge for incomes above ₹50 lakh is not modeled; the total tax
//! carries a zero surcharge term.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{BreakdownCalculator, TaxRegime};
//!
//! let regime = TaxRegime::fy_2025_26();
//! let calculator = BreakdownCalculator::new(&regime);
//!
//! let breakdown = calculator.calculate(dec!(2000000.00)).unwrap();
//!
//! assert_eq!(breakdown.employee_pf_annual, dec!(21600.00));
//! assert_eq!(breakdown.taxable_income_annual, dec!(1903400.00));
//! assert_eq!(breakdown.total_tax_annual, dec!(187907.20));
//! assert_eq!(breakdown.net_pay_annual, dec!(1790492.80));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, round_half_up};
use crate::models::{TaxRegime, TaxRegimeError};

/// Full salary breakdown for one annual CTC figure.
///
/// Constructed fresh on every calculation and never mutated afterwards.
/// Annual amounts are rounded to two decimal places; monthly amounts are
/// the exact quotient of the annual figure and twelve, with display
/// rounding left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Annual cost to company, as supplied by the caller.
    pub annual_ctc: Decimal,

    /// Flat standard deduction applied before the slab schedule.
    pub standard_deduction_annual: Decimal,

    /// Estimated employee provident fund contribution for the year.
    pub employee_pf_annual: Decimal,

    /// Income subject to the slab schedule, before the rebate.
    pub taxable_income_annual: Decimal,

    /// Slab tax after the rebate, before cess. Never negative.
    pub income_tax_annual: Decimal,

    /// Health and education cess on the post-rebate tax.
    pub cess_annual: Decimal,

    /// Income tax plus cess. No surcharge term is modeled.
    pub total_tax_annual: Decimal,

    /// In-hand pay for the year: CTC less total tax and PF.
    pub net_pay_annual: Decimal,

    pub monthly_ctc: Decimal,
    pub monthly_employee_pf: Decimal,
    pub monthly_tax: Decimal,
    pub monthly_net_pay: Decimal,
}

impl SalaryBreakdown {
    /// Display rows for the annual group, in presentation order.
    pub fn annual_rows(&self) -> [(&'static str, Decimal); 6] {
        [
            ("Annual CTC", self.annual_ctc),
            ("Annual Standard Deduction", self.standard_deduction_annual),
            ("Annual Employee PF Deduction", self.employee_pf_annual),
            (
                "Annual Taxable Income (before rebate)",
                self.taxable_income_annual,
            ),
            ("Total Annual Income Tax", self.total_tax_annual),
            ("Annual In-Hand Salary", self.net_pay_annual),
        ]
    }

    /// Display rows for the monthly group, in presentation order.
    pub fn monthly_rows(&self) -> [(&'static str, Decimal); 4] {
        [
            ("Monthly CTC", self.monthly_ctc),
            ("Monthly Employee PF Deduction", self.monthly_employee_pf),
            ("Monthly Income Tax", self.monthly_tax),
            ("Monthly In-Hand Salary", self.monthly_net_pay),
        ]
    }
}

/// Calculator for the annual and monthly salary breakdown.
///
/// Borrows a [`TaxRegime`] and derives every figure from the single CTC
/// input. Pure and deterministic: the same input always produces the
/// same breakdown.
#[derive(Debug, Clone)]
pub struct BreakdownCalculator<'a> {
    regime: &'a TaxRegime,
}

impl<'a> BreakdownCalculator<'a> {
    /// Creates a calculator over the given regime.
    pub fn new(regime: &'a TaxRegime) -> Self {
        Self { regime }
    }

    /// Calculates the complete breakdown for one annual CTC figure.
    ///
    /// Callers are expected to reject empty, non-numeric, and non-positive
    /// input before calling; intermediate amounts here are clamped at zero
    /// rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaxRegimeError`] if the regime fails structural
    /// validation. The computation itself is total over the valid domain.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::{BreakdownCalculator, TaxRegime};
    ///
    /// let regime = TaxRegime::fy_2025_26();
    /// let calculator = BreakdownCalculator::new(&regime);
    ///
    /// // The rebate zeroes out tax for a 10-lakh CTC.
    /// let breakdown = calculator.calculate(dec!(1000000.00)).unwrap();
    ///
    /// assert_eq!(breakdown.total_tax_annual, dec!(0.00));
    /// assert_eq!(breakdown.net_pay_annual, dec!(978400.00));
    /// ```
    pub fn calculate(
        &self,
        annual_ctc: Decimal,
    ) -> Result<SalaryBreakdown, TaxRegimeError> {
        self.regime.validate()?;

        let employee_pf = self.employee_pf(annual_ctc);
        let taxable_income = self.taxable_income(annual_ctc, employee_pf);
        let pre_rebate_tax = self.slab_tax(taxable_income);
        let income_tax = self.apply_rebate(taxable_income, pre_rebate_tax);

        // Surcharge applies only above ₹50 lakh and is not modeled here.
        let surcharge = Decimal::ZERO;
        let cess = self.cess(income_tax + surcharge);
        let total_tax = income_tax + surcharge + cess;
        let net_pay = annual_ctc - total_tax - employee_pf;

        debug!(%annual_ctc, %taxable_income, %total_tax, "calculated salary breakdown");

        let months = Decimal::from(12);
        Ok(SalaryBreakdown {
            annual_ctc,
            standard_deduction_annual: self.regime.standard_deduction,
            employee_pf_annual: employee_pf,
            taxable_income_annual: taxable_income,
            income_tax_annual: income_tax,
            cess_annual: cess,
            total_tax_annual: total_tax,
            net_pay_annual: net_pay,
            monthly_ctc: annual_ctc / months,
            monthly_employee_pf: employee_pf / months,
            monthly_tax: total_tax / months,
            monthly_net_pay: net_pay / months,
        })
    }

    /// Estimates the annual employee PF contribution.
    ///
    /// PF is charged on Basic+DA, approximated as a fixed share of CTC and
    /// capped at the statutory wage ceiling.
    fn employee_pf(
        &self,
        annual_ctc: Decimal,
    ) -> Decimal {
        let basic_and_da = annual_ctc * self.regime.basic_pay_factor;
        round_half_up(self.regime.pf_rate * basic_and_da.min(self.regime.pf_wage_ceiling))
    }

    /// Calculates taxable income, floored at zero.
    fn taxable_income(
        &self,
        annual_ctc: Decimal,
        employee_pf: Decimal,
    ) -> Decimal {
        max(
            round_half_up(annual_ctc - employee_pf - self.regime.standard_deduction),
            Decimal::ZERO,
        )
    }

    /// Sums the marginal tax over every band the taxable income reaches.
    fn slab_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let mut tax = Decimal::ZERO;
        for slab in &self.regime.slabs {
            if taxable_income <= slab.lower_bound {
                break;
            }
            let slab_top = slab.upper_bound.unwrap_or(taxable_income);
            tax += (taxable_income.min(slab_top) - slab.lower_bound) * slab.rate;
        }
        round_half_up(tax)
    }

    /// Applies the Section 87A rebate for taxable income under the
    /// threshold, never letting tax go negative.
    fn apply_rebate(
        &self,
        taxable_income: Decimal,
        pre_rebate_tax: Decimal,
    ) -> Decimal {
        if taxable_income <= self.regime.rebate_threshold {
            max(pre_rebate_tax - self.regime.rebate_cap, Decimal::ZERO)
        } else {
            pre_rebate_tax
        }
    }

    /// Health and education cess on the post-rebate tax.
    fn cess(
        &self,
        income_tax: Decimal,
    ) -> Decimal {
        round_half_up(income_tax * self.regime.cess_rate)
    }
}
