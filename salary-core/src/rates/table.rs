use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use super::builtin;
use crate::models::{RateSet, RateSetError, TaxYear};

/// Returned by [`RateTable::lookup`] for a year with no configured rate set.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("unsupported tax year {0}")]
pub struct UnsupportedYearError(pub TaxYear);

/// Errors raised while assembling a [`RateTable`] from external rate sets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RateTableError {
    #[error("rate table must contain at least one year")]
    Empty,

    #[error("tax year {0} is configured more than once")]
    DuplicateYear(TaxYear),

    #[error(transparent)]
    InvalidRateSet(#[from] RateSetError),
}

/// Read-only mapping from tax year to its [`RateSet`].
///
/// Adding a year is a data change: either extend the built-in sets or load
/// them from CSV and pass them to [`RateTable::from_rate_sets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rate_sets: BTreeMap<TaxYear, RateSet>,
}

impl RateTable {
    /// The current (2024) and next (2025) year rate sets.
    pub fn builtin() -> Self {
        let rate_sets = builtin::rate_sets()
            .into_iter()
            .map(|rate_set| (rate_set.tax_year, rate_set))
            .collect();
        Self { rate_sets }
    }

    /// Builds a table from externally supplied rate sets.
    ///
    /// # Errors
    ///
    /// * [`RateTableError::Empty`] if no rate sets are given.
    /// * [`RateTableError::DuplicateYear`] if two sets share a year.
    /// * [`RateTableError::InvalidRateSet`] if any set fails validation.
    pub fn from_rate_sets<I>(rate_sets: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = RateSet>,
    {
        let mut table = BTreeMap::new();
        for rate_set in rate_sets {
            rate_set.validate()?;
            let year = rate_set.tax_year;
            if table.insert(year, rate_set).is_some() {
                return Err(RateTableError::DuplicateYear(year));
            }
        }

        if table.is_empty() {
            return Err(RateTableError::Empty);
        }

        debug!(years = table.len(), "rate table assembled");
        Ok(Self { rate_sets: table })
    }

    /// # Errors
    ///
    /// [`UnsupportedYearError`] if `year` is not configured.
    pub fn lookup(
        &self,
        year: TaxYear,
    ) -> Result<&RateSet, UnsupportedYearError> {
        self.rate_sets.get(&year).ok_or_else(|| {
            debug!(%year, "no rate set configured");
            UnsupportedYearError(year)
        })
    }

    /// Configured years in ascending order.
    pub fn years(&self) -> impl DoubleEndedIterator<Item = TaxYear> + '_ {
        self.rate_sets.keys().copied()
    }

    pub fn rate_sets(&self) -> impl Iterator<Item = &RateSet> {
        self.rate_sets.values()
    }

    /// Earliest configured year.
    pub fn current_year(&self) -> TaxYear {
        self.years().next().unwrap_or(builtin::CURRENT_YEAR)
    }

    /// Latest configured year.
    pub fn next_year(&self) -> TaxYear {
        self.years().next_back().unwrap_or(builtin::NEXT_YEAR)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
