use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{InsuranceRates, TaxYear};

/// The six mandatory deductions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeductionKind {
    NationalPension,
    HealthInsurance,
    LongTermCare,
    EmploymentInsurance,
    IncomeTax,
    LocalIncomeTax,
}

impl DeductionKind {
    pub const ALL: [DeductionKind; 6] = [
        Self::NationalPension,
        Self::HealthInsurance,
        Self::LongTermCare,
        Self::EmploymentInsurance,
        Self::IncomeTax,
        Self::LocalIncomeTax,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NationalPension => "National pension",
            Self::HealthInsurance => "Health insurance",
            Self::LongTermCare => "Long-term care insurance",
            Self::EmploymentInsurance => "Employment insurance",
            Self::IncomeTax => "Income tax",
            Self::LocalIncomeTax => "Local income tax",
        }
    }

    pub fn local_name(&self) -> &'static str {
        match self {
            Self::NationalPension => "국민연금",
            Self::HealthInsurance => "건강보험",
            Self::LongTermCare => "장기요양보험",
            Self::EmploymentInsurance => "고용보험",
            Self::IncomeTax => "소득세",
            Self::LocalIncomeTax => "지방소득세",
        }
    }

    pub fn is_insurance(&self) -> bool {
        !matches!(self, Self::IncomeTax | Self::LocalIncomeTax)
    }
}

/// Itemised monthly deductions and the resulting net pay.
///
/// Amounts are exact; nothing is rounded here. `net_salary` may be negative
/// for very small salaries and is not clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub tax_year: TaxYear,
    pub monthly_salary: Decimal,

    pub national_pension: Decimal,
    pub health_insurance: Decimal,
    pub long_term_care: Decimal,
    pub employment_insurance: Decimal,

    /// Salary minus the earned-income deduction; may be negative.
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub local_income_tax: Decimal,

    pub insurance_rates: InsuranceRates,
    /// Rate of the matched bracket, applied to the whole taxable income.
    pub tax_rate: Decimal,

    pub total_deduction: Decimal,
    pub net_salary: Decimal,
}

impl DeductionBreakdown {
    pub fn amount(
        &self,
        kind: DeductionKind,
    ) -> Decimal {
        match kind {
            DeductionKind::NationalPension => self.national_pension,
            DeductionKind::HealthInsurance => self.health_insurance,
            DeductionKind::LongTermCare => self.long_term_care,
            DeductionKind::EmploymentInsurance => self.employment_insurance,
            DeductionKind::IncomeTax => self.income_tax,
            DeductionKind::LocalIncomeTax => self.local_income_tax,
        }
    }

    /// `(kind, amount)` pairs in display order.
    pub fn items(&self) -> impl Iterator<Item = (DeductionKind, Decimal)> + '_ {
        DeductionKind::ALL
            .into_iter()
            .map(|kind| (kind, self.amount(kind)))
    }

    pub fn total_insurance(&self) -> Decimal {
        self.items()
            .filter(|(kind, _)| kind.is_insurance())
            .map(|(_, amount)| amount)
            .sum()
    }

    pub fn total_tax(&self) -> Decimal {
        self.income_tax + self.local_income_tax
    }

    /// Fraction of the total deduction taken by `kind`.
    ///
    /// `None` when nothing is deducted, or when the total is so close to zero
    /// that the fraction does not fit in a [`Decimal`].
    pub fn share_of_total(
        &self,
        kind: DeductionKind,
    ) -> Option<Decimal> {
        if self.total_deduction.is_zero() {
            return None;
        }
        self.amount(kind).checked_div(self.total_deduction)
    }
}
