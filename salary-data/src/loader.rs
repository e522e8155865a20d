use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use salary_core::{RateSet, RateTable, RateTableError, TaxBracket, TaxYear};
use serde::Deserialize;
use thiserror::Error;

/// File name of the per-year rates inside a rates directory.
pub const RATE_SETS_FILE: &str = "rate_sets.csv";
/// File name of the bracket schedules inside a rates directory.
pub const TAX_BRACKETS_FILE: &str = "tax_brackets.csv";

/// Errors that can occur when loading rate data.
#[derive(Debug, Error)]
pub enum RateSetLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tax brackets given for {0} but no rate set")]
    BracketsWithoutRateSet(TaxYear),

    #[error("Rate set for {0} has no tax brackets")]
    RateSetWithoutBrackets(TaxYear),

    #[error("Invalid rate table: {0}")]
    RateTable(#[from] RateTableError),
}

impl From<csv::Error> for RateSetLoaderError {
    fn from(err: csv::Error) -> Self {
        RateSetLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of `rate_sets.csv`.
///
/// - `tax_year`: the year the rates apply to (e.g., 2025)
/// - `national_pension_rate`, `health_insurance_rate`,
///   `employment_insurance_rate`: fractions of monthly salary
/// - `long_term_care_rate`: fraction of the health-insurance amount
/// - `earned_income_deduction`: monthly amount subtracted before the bracket
///   lookup
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateSetRecord {
    pub tax_year: i32,
    pub national_pension_rate: Decimal,
    pub health_insurance_rate: Decimal,
    pub long_term_care_rate: Decimal,
    pub employment_insurance_rate: Decimal,
    pub earned_income_deduction: Decimal,
}

/// A single row of `tax_brackets.csv`.
///
/// - `tax_year`: the year the bracket belongs to
/// - `upper_bound`: inclusive upper bound (empty for unlimited)
/// - `rate`: the rate as a decimal (e.g., 0.06 for 6%)
///
/// Rows of a year must appear in ascending bound order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub tax_year: i32,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for rate tables from CSV files.
pub struct RateSetLoader;

impl RateSetLoader {
    /// Parse `rate_sets.csv` rows from any reader.
    pub fn parse_rate_sets<R: Read>(reader: R) -> Result<Vec<RateSetRecord>, RateSetLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RateSetRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse `tax_brackets.csv` rows from any reader, keeping file order.
    pub fn parse_brackets<R: Read>(
        reader: R
    ) -> Result<Vec<TaxBracketRecord>, RateSetLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Combine parsed rows into a validated [`RateTable`].
    ///
    /// Every rate set needs at least one bracket row and every bracket row
    /// needs a rate set for its year. Schedule validation (ordering, an
    /// unbounded top bracket, rate ranges) is done by the table itself.
    pub fn assemble(
        rate_rows: &[RateSetRecord],
        bracket_rows: &[TaxBracketRecord],
    ) -> Result<RateTable, RateSetLoaderError> {
        let mut schedules: BTreeMap<TaxYear, Vec<TaxBracket>> = BTreeMap::new();
        for row in bracket_rows {
            schedules
                .entry(TaxYear::new(row.tax_year))
                .or_default()
                .push(TaxBracket {
                    upper_bound: row.upper_bound,
                    rate: row.rate,
                });
        }

        if let Some(orphan) = schedules
            .keys()
            .find(|year| !rate_rows.iter().any(|row| row.tax_year == year.value()))
        {
            return Err(RateSetLoaderError::BracketsWithoutRateSet(*orphan));
        }

        let rate_sets = rate_rows
            .iter()
            .map(|row| {
                let tax_year = TaxYear::new(row.tax_year);
                let tax_brackets = schedules
                    .get(&tax_year)
                    .cloned()
                    .ok_or(RateSetLoaderError::RateSetWithoutBrackets(tax_year))?;

                Ok(RateSet {
                    tax_year,
                    national_pension_rate: row.national_pension_rate,
                    health_insurance_rate: row.health_insurance_rate,
                    long_term_care_rate: row.long_term_care_rate,
                    employment_insurance_rate: row.employment_insurance_rate,
                    earned_income_deduction: row.earned_income_deduction,
                    tax_brackets,
                })
            })
            .collect::<Result<Vec<_>, RateSetLoaderError>>()?;

        Ok(RateTable::from_rate_sets(rate_sets)?)
    }

    /// Read [`RATE_SETS_FILE`] and [`TAX_BRACKETS_FILE`] from `dir`.
    pub fn load_dir(dir: &Path) -> Result<RateTable, RateSetLoaderError> {
        let rate_rows = Self::parse_rate_sets(open(&dir.join(RATE_SETS_FILE))?)?;
        let bracket_rows = Self::parse_brackets(open(&dir.join(TAX_BRACKETS_FILE))?)?;

        Self::assemble(&rate_rows, &bracket_rows)
    }
}

fn open(path: &Path) -> Result<File, RateSetLoaderError> {
    File::open(path).map_err(|source| RateSetLoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}
