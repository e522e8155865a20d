use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of a flat-on-bracket schedule.
///
/// The matched bracket's `rate` applies to the whole taxable base, not just
/// the slice above the previous bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound; `None` for the open-ended top bracket.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn bounded(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }

    /// True when `taxable_income` does not exceed this bracket's bound.
    pub fn contains(
        &self,
        taxable_income: Decimal,
    ) -> bool {
        self.upper_bound
            .is_none_or(|upper_bound| taxable_income <= upper_bound)
    }
}
