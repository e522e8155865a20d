//! CSV-backed rate tables.
//!
//! Lets a new tax year be added by editing `rate_sets.csv` and
//! `tax_brackets.csv` rather than code. See [`RateSetLoader`] for the
//! file formats.

pub mod loader;

pub use loader::{
    RATE_SETS_FILE, RateSetLoader, RateSetLoaderError, RateSetRecord, TAX_BRACKETS_FILE,
    TaxBracketRecord,
};
