//! Take-home-pay calculations.
//!
//! [`compute_breakdown`] is the entry point used by presenters: it validates
//! the request, selects the year's rate set and runs the
//! [`DeductionEngine`].

pub mod common;
pub mod deduction_engine;

use rust_decimal::Decimal;
use thiserror::Error;

pub use deduction_engine::{DeductionEngine, LOCAL_TAX_RATE};

use crate::models::{CalculationRequest, DeductionBreakdown};
use crate::rates::{RateTable, UnsupportedYearError};

/// Errors that can occur while computing a breakdown.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The monthly salary was below zero.
    #[error("monthly salary must not be negative, got {0}")]
    InvalidSalary(Decimal),

    #[error(transparent)]
    UnsupportedYear(#[from] UnsupportedYearError),

    /// The rate set has no bracket covering the taxable income.
    #[error("no tax bracket found for taxable income {0}")]
    NoMatchingBracket(Decimal),
}

/// Computes the deduction breakdown for one request.
///
/// The salary is checked before the year, so a negative salary is reported
/// even when the year is also unsupported. No partial result is produced on
/// error.
///
/// # Errors
///
/// * [`CalculationError::InvalidSalary`] for a negative salary.
/// * [`CalculationError::UnsupportedYear`] for a year missing from `table`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::{CalculationError, CalculationRequest, RateTable, TaxYear, compute_breakdown};
///
/// let table = RateTable::builtin();
///
/// let request = CalculationRequest::new(dec!(3000000), TaxYear::new(2024));
/// let breakdown = compute_breakdown(&table, &request).unwrap();
/// assert_eq!(breakdown.employment_insurance, dec!(27000));
///
/// let request = CalculationRequest::new(dec!(3000000), TaxYear::new(2030));
/// assert!(matches!(
///     compute_breakdown(&table, &request),
///     Err(CalculationError::UnsupportedYear(_))
/// ));
/// ```
pub fn compute_breakdown(
    table: &RateTable,
    request: &CalculationRequest,
) -> Result<DeductionBreakdown, CalculationError> {
    if request.monthly_salary < Decimal::ZERO {
        return Err(CalculationError::InvalidSalary(request.monthly_salary));
    }

    let rate_set = table.lookup(request.tax_year)?;
    DeductionEngine::new(rate_set).calculate(request.monthly_salary)
}
