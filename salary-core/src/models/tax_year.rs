use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix used by the Korean year labels (`"2024년"`).
const YEAR_SUFFIX: &str = "년";

/// Identifies the ruleset a calculation is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxYear(i32);

impl TaxYear {
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Accepts either a bare year (`"2025"`) or the labelled form (`"2025년"`).
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix(YEAR_SUFFIX).unwrap_or(trimmed).trim();
        digits.parse().ok().map(Self)
    }

    /// Label shown to users, e.g. `"2025년"`.
    pub fn label(self) -> String {
        format!("{}{YEAR_SUFFIX}", self.0)
    }
}

impl fmt::Display for TaxYear {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a recognisable year.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid tax year '{0}'")]
pub struct ParseTaxYearError(String);

impl FromStr for TaxYear {
    type Err = ParseTaxYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseTaxYearError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_bare_year() {
        assert_eq!(TaxYear::parse("2024"), Some(TaxYear::new(2024)));
    }

    #[test]
    fn parse_accepts_labelled_year() {
        assert_eq!(TaxYear::parse("2025년"), Some(TaxYear::new(2025)));
        assert_eq!(TaxYear::parse(" 2025 년 "), Some(TaxYear::new(2025)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(TaxYear::parse("next year"), None);
        assert_eq!(TaxYear::parse(""), None);
    }

    #[test]
    fn from_str_reports_offending_input() {
        let err = "20x4".parse::<TaxYear>().unwrap_err();

        assert_eq!(err.to_string(), "invalid tax year '20x4'");
    }

    #[test]
    fn label_appends_year_suffix() {
        assert_eq!(TaxYear::new(2024).label(), "2024년");
        assert_eq!(TaxYear::new(2024).to_string(), "2024");
    }

    #[test]
    fn years_order_chronologically() {
        assert!(TaxYear::new(2024) < TaxYear::new(2025));
    }
}
