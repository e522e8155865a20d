//! Monthly take-home-pay calculation.
//!
//! Given a gross monthly salary and a tax year, computes the four
//! social-insurance contributions, income tax and local income tax, and the
//! resulting net pay. Rates for each year live in a [`RateTable`].

pub mod calculations;
pub mod models;
pub mod rates;

pub use calculations::{CalculationError, DeductionEngine, compute_breakdown};
pub use models::*;
pub use rates::{RateTable, RateTableError, UnsupportedYearError};
