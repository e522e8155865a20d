//! Monthly deduction calculations.
//!
//! Turns a gross monthly salary into the four social-insurance contributions,
//! income tax and local income tax of one tax year.
//!
//! | Item                 | Formula                                    |
//! |----------------------|--------------------------------------------|
//! | National pension     | salary × pension rate                      |
//! | Health insurance     | salary × health rate                       |
//! | Long-term care       | health insurance × long-term care rate     |
//! | Employment insurance | salary × employment rate                   |
//! | Taxable income       | salary − earned-income deduction           |
//! | Income tax           | taxable income × matched bracket rate      |
//! | Local income tax     | income tax × 10%                           |
//!
//! The bracket rate is applied to the whole taxable income (flat-on-bracket),
//! not cumulatively per slice. Taxable income below zero is taxed at the
//! lowest bracket rate, producing a negative income tax.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::calculations::DeductionEngine;
//! use salary_core::{RateTable, TaxYear};
//!
//! let table = RateTable::builtin();
//! let rate_set = table.lookup(TaxYear::new(2024)).unwrap();
//!
//! let breakdown = DeductionEngine::new(rate_set)
//!     .calculate(dec!(3000000))
//!     .unwrap();
//!
//! assert_eq!(breakdown.national_pension, dec!(135000));
//! assert_eq!(breakdown.health_insurance, dec!(212700));
//! assert_eq!(breakdown.long_term_care, dec!(27246.87));
//! assert_eq!(breakdown.income_tax, dec!(90000));
//! assert_eq!(breakdown.local_income_tax, dec!(9000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, warn};

use super::CalculationError;
use crate::models::{DeductionBreakdown, RateSet};

/// Local income tax as a fraction of income tax. Fixed across years.
pub const LOCAL_TAX_RATE: Decimal = dec!(0.1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InsuranceAmounts {
    national_pension: Decimal,
    health_insurance: Decimal,
    long_term_care: Decimal,
    employment_insurance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaxAmounts {
    taxable_income: Decimal,
    rate: Decimal,
    income_tax: Decimal,
    local_income_tax: Decimal,
}

/// Calculator for the deductions of one [`RateSet`].
#[derive(Debug, Clone, Copy)]
pub struct DeductionEngine<'a> {
    rate_set: &'a RateSet,
}

impl<'a> DeductionEngine<'a> {
    pub fn new(rate_set: &'a RateSet) -> Self {
        Self { rate_set }
    }

    /// Computes the full breakdown for `monthly_salary`.
    ///
    /// # Errors
    ///
    /// * [`CalculationError::InvalidSalary`] if the salary is negative.
    /// * [`CalculationError::NoMatchingBracket`] if the rate set has no
    ///   unbounded top bracket. Rate sets held by a `RateTable` are validated
    ///   and never produce this.
    pub fn calculate(
        &self,
        monthly_salary: Decimal,
    ) -> Result<DeductionBreakdown, CalculationError> {
        if monthly_salary < Decimal::ZERO {
            return Err(CalculationError::InvalidSalary(monthly_salary));
        }

        let insurance = self.insurance(monthly_salary);
        let tax = self.tax(monthly_salary)?;

        let breakdown = self.aggregate(monthly_salary, insurance, tax);
        debug!(
            year = %self.rate_set.tax_year,
            salary = %monthly_salary,
            total_deduction = %breakdown.total_deduction,
            net_salary = %breakdown.net_salary,
            "deductions calculated"
        );
        Ok(breakdown)
    }

    /// Social-insurance contributions. Long-term care compounds on the
    /// health-insurance amount.
    fn insurance(
        &self,
        monthly_salary: Decimal,
    ) -> InsuranceAmounts {
        let health_insurance = monthly_salary * self.rate_set.health_insurance_rate;
        InsuranceAmounts {
            national_pension: monthly_salary * self.rate_set.national_pension_rate,
            health_insurance,
            long_term_care: health_insurance * self.rate_set.long_term_care_rate,
            employment_insurance: monthly_salary * self.rate_set.employment_insurance_rate,
        }
    }

    fn taxable_income(
        &self,
        monthly_salary: Decimal,
    ) -> Decimal {
        let taxable_income = monthly_salary - self.rate_set.earned_income_deduction;
        if taxable_income < Decimal::ZERO {
            warn!(
                salary = %monthly_salary,
                deduction = %self.rate_set.earned_income_deduction,
                "taxable income is negative; income tax will be a rebate"
            );
        }
        taxable_income
    }

    fn tax(
        &self,
        monthly_salary: Decimal,
    ) -> Result<TaxAmounts, CalculationError> {
        let taxable_income = self.taxable_income(monthly_salary);
        let rate = self
            .rate_set
            .bracket_for(taxable_income)
            .map(|bracket| bracket.rate)
            .ok_or(CalculationError::NoMatchingBracket(taxable_income))?;

        let income_tax = taxable_income * rate;
        Ok(TaxAmounts {
            taxable_income,
            rate,
            income_tax,
            local_income_tax: income_tax * LOCAL_TAX_RATE,
        })
    }

    fn aggregate(
        &self,
        monthly_salary: Decimal,
        insurance: InsuranceAmounts,
        tax: TaxAmounts,
    ) -> DeductionBreakdown {
        let total_deduction = insurance.national_pension
            + insurance.health_insurance
            + insurance.long_term_care
            + insurance.employment_insurance
            + tax.income_tax
            + tax.local_income_tax;

        DeductionBreakdown {
            tax_year: self.rate_set.tax_year,
            monthly_salary,
            national_pension: insurance.national_pension,
            health_insurance: insurance.health_insurance,
            long_term_care: insurance.long_term_care,
            employment_insurance: insurance.employment_insurance,
            taxable_income: tax.taxable_income,
            income_tax: tax.income_tax,
            local_income_tax: tax.local_income_tax,
            insurance_rates: self.rate_set.insurance_rates(),
            tax_rate: tax.rate,
            total_deduction,
            net_salary: monthly_salary - total_deduction,
        }
    }
}
