use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{TaxBracket, TaxYear};

/// Reasons a [`RateSet`] cannot be used for calculations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RateSetError {
    #[error("rate set for {0} has no tax brackets")]
    NoBrackets(TaxYear),

    /// The last bracket must have no upper bound so every income matches.
    #[error("rate set for {0} has no unbounded top bracket")]
    MissingUnboundedBracket(TaxYear),

    #[error("rate set for {0} has an unbounded bracket before the last position")]
    UnboundedBracketNotLast(TaxYear),

    #[error("rate set for {year}: bracket bound {bound} is not above the previous bound")]
    BoundsNotAscending { year: TaxYear, bound: Decimal },

    #[error("rate set for {year}: bracket rate {rate} is lower than the bracket below it")]
    RatesNotMonotonic { year: TaxYear, rate: Decimal },

    #[error("rate set for {year}: {field} must be between 0 and 1, got {rate}")]
    RateOutOfRange {
        year: TaxYear,
        field: &'static str,
        rate: Decimal,
    },

    #[error("rate set for {year}: earned income deduction must be non-negative, got {amount}")]
    NegativeDeduction { year: TaxYear, amount: Decimal },
}

/// The four social-insurance rates of a tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceRates {
    pub national_pension: Decimal,
    pub health_insurance: Decimal,
    /// Applied to the health-insurance amount, not to the salary.
    pub long_term_care: Decimal,
    pub employment_insurance: Decimal,
}

/// Insurance rates, earned-income deduction and bracket schedule for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSet {
    pub tax_year: TaxYear,
    pub national_pension_rate: Decimal,
    pub health_insurance_rate: Decimal,
    pub long_term_care_rate: Decimal,
    pub employment_insurance_rate: Decimal,
    /// Flat monthly amount subtracted from salary before the bracket lookup.
    pub earned_income_deduction: Decimal,
    /// Ordered by ascending upper bound; the last entry is unbounded.
    pub tax_brackets: Vec<TaxBracket>,
}

impl RateSet {
    pub fn insurance_rates(&self) -> InsuranceRates {
        InsuranceRates {
            national_pension: self.national_pension_rate,
            health_insurance: self.health_insurance_rate,
            long_term_care: self.long_term_care_rate,
            employment_insurance: self.employment_insurance_rate,
        }
    }

    /// First bracket whose upper bound is not exceeded by `taxable_income`.
    pub fn bracket_for(
        &self,
        taxable_income: Decimal,
    ) -> Option<&TaxBracket> {
        self.tax_brackets
            .iter()
            .find(|bracket| bracket.contains(taxable_income))
    }

    /// Checks the invariants the deduction engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`RateSetError`] found, checking the bracket
    /// schedule before the individual rates.
    pub fn validate(&self) -> Result<(), RateSetError> {
        let year = self.tax_year;

        let (top, bounded) = self
            .tax_brackets
            .split_last()
            .ok_or(RateSetError::NoBrackets(year))?;
        if top.upper_bound.is_some() {
            return Err(RateSetError::MissingUnboundedBracket(year));
        }

        let mut previous_bound: Option<Decimal> = None;
        for bracket in bounded {
            let Some(bound) = bracket.upper_bound else {
                return Err(RateSetError::UnboundedBracketNotLast(year));
            };
            if previous_bound.is_some_and(|previous| bound <= previous) {
                return Err(RateSetError::BoundsNotAscending { year, bound });
            }
            previous_bound = Some(bound);
        }

        for pair in self.tax_brackets.windows(2) {
            if pair[1].rate < pair[0].rate {
                return Err(RateSetError::RatesNotMonotonic {
                    year,
                    rate: pair[1].rate,
                });
            }
        }

        let rates = [
            ("national_pension_rate", self.national_pension_rate),
            ("health_insurance_rate", self.health_insurance_rate),
            ("long_term_care_rate", self.long_term_care_rate),
            ("employment_insurance_rate", self.employment_insurance_rate),
        ];
        let bracket_rates = self
            .tax_brackets
            .iter()
            .map(|bracket| ("tax_rate", bracket.rate));
        for (field, rate) in rates.into_iter().chain(bracket_rates) {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(RateSetError::RateOutOfRange { year, field, rate });
            }
        }

        if self.earned_income_deduction < Decimal::ZERO {
            return Err(RateSetError::NegativeDeduction {
                year,
                amount: self.earned_income_deduction,
            });
        }

        Ok(())
    }
}
