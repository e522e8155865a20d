//! Integration tests loading the bundled rate tables from disk.

use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use salary_core::{CalculationRequest, RateTable, TaxYear, compute_breakdown};
use salary_data::RateSetLoader;

const RATE_SETS_CSV: &str = include_str!("../data/rate_sets.csv");
const TAX_BRACKETS_CSV: &str = include_str!("../data/tax_brackets.csv");

fn data_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

#[test]
fn test_bundled_data_matches_builtin_table() {
    let table = RateSetLoader::load_dir(data_dir()).expect("Failed to load bundled data");

    assert_eq!(table, RateTable::builtin());
}

#[test]
fn test_bundled_files_have_expected_row_counts() {
    let rates = RateSetLoader::parse_rate_sets(RATE_SETS_CSV.as_bytes()).unwrap();
    let brackets = RateSetLoader::parse_brackets(TAX_BRACKETS_CSV.as_bytes()).unwrap();

    assert_eq!(rates.len(), 2);
    assert_eq!(brackets.len(), 14);
    assert_eq!(brackets.iter().filter(|b| b.upper_bound.is_none()).count(), 2);
}

#[test]
fn test_loaded_table_drives_calculation() {
    let table = RateSetLoader::load_dir(data_dir()).expect("Failed to load bundled data");
    let request = CalculationRequest::new(dec!(3000000), TaxYear::new(2024));

    let breakdown = compute_breakdown(&table, &request).expect("Calculation failed");

    assert_eq!(breakdown.national_pension, dec!(135000));
    assert_eq!(breakdown.long_term_care, dec!(27246.87));
    assert_eq!(breakdown.income_tax, dec!(90000));
}

#[test]
fn test_loaded_table_can_add_a_year() {
    let rates = format!("{RATE_SETS_CSV}2026,0.05,0.074,0.13,0.009,1800000\n");
    let brackets = format!("{TAX_BRACKETS_CSV}2026,20000000,0.06\n2026,,0.45\n");

    let table = RateSetLoader::assemble(
        &RateSetLoader::parse_rate_sets(rates.as_bytes()).unwrap(),
        &RateSetLoader::parse_brackets(brackets.as_bytes()).unwrap(),
    )
    .expect("Failed to assemble");

    assert_eq!(table.current_year(), TaxYear::new(2024));
    assert_eq!(table.next_year(), TaxYear::new(2026));
    assert_eq!(
        table.lookup(TaxYear::new(2026)).unwrap().tax_brackets.len(),
        2
    );
}
