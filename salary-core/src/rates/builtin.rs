//! Rate sets compiled into the binary.
//!
//! 2025 figures are expected values published ahead of the year and will
//! need replacing once the final rates are announced.

use rust_decimal_macros::dec;

use crate::models::{RateSet, TaxBracket, TaxYear};

pub const CURRENT_YEAR: TaxYear = TaxYear::new(2024);
pub const NEXT_YEAR: TaxYear = TaxYear::new(2025);

pub(super) fn rate_sets() -> [RateSet; 2] {
    [rate_set_2024(), rate_set_2025()]
}

fn rate_set_2024() -> RateSet {
    RateSet {
        tax_year: CURRENT_YEAR,
        national_pension_rate: dec!(0.045),
        health_insurance_rate: dec!(0.0709),
        long_term_care_rate: dec!(0.1281),
        employment_insurance_rate: dec!(0.009),
        earned_income_deduction: dec!(1500000),
        tax_brackets: vec![
            TaxBracket::bounded(dec!(14000000), dec!(0.06)),
            TaxBracket::bounded(dec!(50000000), dec!(0.15)),
            TaxBracket::bounded(dec!(88000000), dec!(0.24)),
            TaxBracket::bounded(dec!(150000000), dec!(0.35)),
            TaxBracket::bounded(dec!(300000000), dec!(0.38)),
            TaxBracket::bounded(dec!(500000000), dec!(0.40)),
            TaxBracket::unbounded(dec!(0.42)),
        ],
    }
}

fn rate_set_2025() -> RateSet {
    RateSet {
        tax_year: NEXT_YEAR,
        national_pension_rate: dec!(0.047),
        health_insurance_rate: dec!(0.073),
        long_term_care_rate: dec!(0.13),
        employment_insurance_rate: dec!(0.008),
        earned_income_deduction: dec!(1700000),
        tax_brackets: vec![
            TaxBracket::bounded(dec!(15000000), dec!(0.06)),
            TaxBracket::bounded(dec!(55000000), dec!(0.16)),
            TaxBracket::bounded(dec!(95000000), dec!(0.25)),
            TaxBracket::bounded(dec!(160000000), dec!(0.36)),
            TaxBracket::bounded(dec!(330000000), dec!(0.39)),
            TaxBracket::bounded(dec!(550000000), dec!(0.41)),
            TaxBracket::unbounded(dec!(0.43)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rate_sets_are_valid() {
        for rate_set in rate_sets() {
            assert_eq!(rate_set.validate(), Ok(()), "{}", rate_set.tax_year);
        }
    }
}
