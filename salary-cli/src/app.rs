use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use rust_decimal::Decimal;
use salary_core::{
    CalculationError, CalculationRequest, DeductionBreakdown, RateTable, TaxYear,
    compute_breakdown,
};
use salary_data::RateSetLoader;
use tracing::{debug, info};

const MONTHS_PER_YEAR: u32 = 12;

/// Whether an entered salary is per year or per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SalaryPeriod {
    Annual,
    Monthly,
}

impl SalaryPeriod {
    /// Converts an entered amount to the monthly salary the engine expects.
    pub fn to_monthly(
        self,
        amount: Decimal,
    ) -> Decimal {
        match self {
            Self::Annual => amount / Decimal::from(MONTHS_PER_YEAR),
            Self::Monthly => amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Monthly => "monthly",
        }
    }
}

/// One "calculate" action as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryInput {
    pub amount: Decimal,
    pub period: SalaryPeriod,
    pub tax_year: TaxYear,
}

/// Loads rate tables from `rates_dir` when given, otherwise uses the
/// built-in table.
pub fn load_rate_table(rates_dir: Option<&Path>) -> anyhow::Result<RateTable> {
    match rates_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading rate tables from CSV");
            RateSetLoader::load_dir(dir)
                .with_context(|| format!("failed to load rate tables from {}", dir.display()))
        }
        None => Ok(RateTable::builtin()),
    }
}

/// Converts the input to a monthly request and computes its breakdown.
pub fn calculate(
    table: &RateTable,
    input: &SalaryInput,
) -> Result<DeductionBreakdown, CalculationError> {
    let monthly_salary = input.period.to_monthly(input.amount);
    info!(
        year = %input.tax_year,
        period = input.period.label(),
        amount = %input.amount,
        "calculating take-home pay"
    );

    compute_breakdown(
        table,
        &CalculationRequest::new(monthly_salary, input.tax_year),
    )
}

/// Hint shown when the input must be corrected and the command re-run.
pub fn retry_hint(
    table: &RateTable,
    error: &CalculationError,
) -> Option<String> {
    match error {
        CalculationError::InvalidSalary(_) => {
            Some("enter a salary of zero or more".to_string())
        }
        CalculationError::UnsupportedYear(_) => {
            let years: Vec<_> = table.years().map(|year| year.to_string()).collect();
            Some(format!("choose one of: {}", years.join(", ")))
        }
        CalculationError::NoMatchingBracket(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        amount: Decimal,
        period: SalaryPeriod,
        year: i32,
    ) -> SalaryInput {
        SalaryInput {
            amount,
            period,
            tax_year: TaxYear::new(year),
        }
    }

    // =========================================================================
    // SalaryPeriod tests
    // =========================================================================

    #[test]
    fn to_monthly_divides_annual_by_twelve() {
        assert_eq!(
            SalaryPeriod::Annual.to_monthly(dec!(36000000)),
            dec!(3000000)
        );
    }

    #[test]
    fn to_monthly_keeps_monthly_amount() {
        assert_eq!(
            SalaryPeriod::Monthly.to_monthly(dec!(3000000)),
            dec!(3000000)
        );
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_annual_and_monthly_inputs_agree() {
        let table = RateTable::builtin();

        let from_annual = calculate(&table, &input(dec!(36000000), SalaryPeriod::Annual, 2024));
        let from_monthly = calculate(&table, &input(dec!(3000000), SalaryPeriod::Monthly, 2024));

        assert_eq!(from_annual, from_monthly);
    }

    #[test]
    fn calculate_rejects_negative_annual_salary() {
        let table = RateTable::builtin();

        let result = calculate(&table, &input(dec!(-12), SalaryPeriod::Annual, 2024));

        assert_eq!(result, Err(CalculationError::InvalidSalary(dec!(-1))));
    }

    #[test]
    fn calculate_rejects_unsupported_year() {
        let table = RateTable::builtin();

        let result = calculate(&table, &input(dec!(3000000), SalaryPeriod::Monthly, 2030));

        assert!(matches!(result, Err(CalculationError::UnsupportedYear(_))));
    }

    // =========================================================================
    // load_rate_table / retry_hint tests
    // =========================================================================

    #[test]
    fn load_rate_table_defaults_to_builtin() {
        let table = load_rate_table(None).unwrap();

        assert_eq!(table, RateTable::builtin());
    }

    #[test]
    fn load_rate_table_reports_missing_directory() {
        let err = load_rate_table(Some(Path::new("no/such/rates"))).unwrap_err();

        assert!(err.to_string().contains("no/such/rates"));
    }

    #[test]
    fn retry_hint_lists_configured_years() {
        let table = RateTable::builtin();
        let error = calculate(&table, &input(dec!(1), SalaryPeriod::Monthly, 2030)).unwrap_err();

        assert_eq!(
            retry_hint(&table, &error),
            Some("choose one of: 2024, 2025".to_string())
        );
    }
}
