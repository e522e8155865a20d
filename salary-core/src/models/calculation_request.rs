use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxYear;

/// Input to a single take-home-pay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Gross monthly pay; must be non-negative.
    pub monthly_salary: Decimal,
    pub tax_year: TaxYear,
}

impl CalculationRequest {
    pub fn new(
        monthly_salary: Decimal,
        tax_year: TaxYear,
    ) -> Self {
        Self {
            monthly_salary,
            tax_year,
        }
    }
}
