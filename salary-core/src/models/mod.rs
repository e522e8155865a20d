mod calculation_request;
mod deduction_breakdown;
mod rate_set;
mod tax_bracket;
mod tax_year;

pub use calculation_request::CalculationRequest;
pub use deduction_breakdown::{DeductionBreakdown, DeductionKind};
pub use rate_set::{InsuranceRates, RateSet, RateSetError};
pub use tax_bracket::TaxBracket;
pub use tax_year::{ParseTaxYearError, TaxYear};
