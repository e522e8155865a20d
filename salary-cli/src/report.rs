//! Plain-text rendering of a [`DeductionBreakdown`].
//!
//! Amounts are rounded to whole won here and nowhere else.

use std::fmt::Write;

use rust_decimal::Decimal;
use salary_core::calculations::LOCAL_TAX_RATE;
use salary_core::calculations::common::round_won;
use salary_core::{DeductionBreakdown, DeductionKind};

use crate::utils::{NO_SHARE, format_percent, format_rate, format_won};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 16;

const NOTES: [&str; 3] = [
    "These figures are a rough estimate.",
    "Actual deductions vary with company policy, dependants and other deductions.",
    "Ask your payroll department or a tax accountant for exact amounts.",
];

/// Renders the full report: salary summary, itemised deductions, the
/// formulas used and closing notes.
pub fn render_report(breakdown: &DeductionBreakdown) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, breakdown);
    let _ = write_deductions(&mut out, breakdown);
    let _ = write_formulas(&mut out, breakdown);
    let _ = write_notes(&mut out);
    out
}

fn write_line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) -> std::fmt::Result {
    writeln!(
        out,
        "  {label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        format_won(amount)
    )
}

fn write_summary(
    out: &mut String,
    breakdown: &DeductionBreakdown,
) -> std::fmt::Result {
    writeln!(out, "Take-home pay for {}", breakdown.tax_year.label())?;
    writeln!(out)?;
    // Annual figures are left out when twelve months no longer fit.
    if let Some(annual) = breakdown.monthly_salary.checked_mul(MONTHS_PER_YEAR) {
        write_line(out, "Annual salary", annual)?;
    }
    write_line(out, "Monthly salary", breakdown.monthly_salary)?;
    write_line(out, "Net monthly salary", breakdown.net_salary)?;
    if let Some(annual) = breakdown.net_salary.checked_mul(MONTHS_PER_YEAR) {
        write_line(out, "Net annual salary", annual)?;
    }
    writeln!(out)
}

fn write_deductions(
    out: &mut String,
    breakdown: &DeductionBreakdown,
) -> std::fmt::Result {
    // No shares when the total rounds to 0 won.
    let has_shares = !round_won(breakdown.total_deduction).is_zero();

    writeln!(out, "Monthly deductions")?;
    for (kind, amount) in breakdown.items() {
        let label = format!("{} ({})", kind.label(), kind.local_name());
        let share = breakdown
            .share_of_total(kind)
            .filter(|_| has_shares)
            .map_or_else(|| NO_SHARE.to_string(), format_percent);
        writeln!(
            out,
            "  {label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}{share:>8}",
            format_won(amount),
        )?;
    }
    write_line(out, "Insurance subtotal", breakdown.total_insurance())?;
    write_line(out, "Tax subtotal", breakdown.total_tax())?;
    write_line(out, "Total deductions", breakdown.total_deduction)?;
    writeln!(out)
}

fn write_formulas(
    out: &mut String,
    breakdown: &DeductionBreakdown,
) -> std::fmt::Result {
    let rates = &breakdown.insurance_rates;
    let earned_income_deduction = breakdown.monthly_salary - breakdown.taxable_income;

    writeln!(out, "How it is calculated")?;
    writeln!(
        out,
        "  {} = monthly salary × {}",
        DeductionKind::NationalPension.label(),
        format_rate(rates.national_pension, 3)
    )?;
    writeln!(
        out,
        "  {} = monthly salary × {}",
        DeductionKind::HealthInsurance.label(),
        format_rate(rates.health_insurance, 3)
    )?;
    writeln!(
        out,
        "  {} = health insurance × {}",
        DeductionKind::LongTermCare.label(),
        format_rate(rates.long_term_care, 3)
    )?;
    writeln!(
        out,
        "  {} = monthly salary × {}",
        DeductionKind::EmploymentInsurance.label(),
        format_rate(rates.employment_insurance, 3)
    )?;
    writeln!(
        out,
        "  {} = (monthly salary - {}) × {}",
        DeductionKind::IncomeTax.label(),
        format_won(earned_income_deduction),
        format_rate(breakdown.tax_rate, 2)
    )?;
    writeln!(
        out,
        "  {} = income tax × {}",
        DeductionKind::LocalIncomeTax.label(),
        format_rate(LOCAL_TAX_RATE, 2)
    )?;
    writeln!(out)
}

fn write_notes(out: &mut String) -> std::fmt::Result {
    writeln!(out, "Notes")?;
    for note in NOTES {
        writeln!(out, "  - {note}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use salary_core::{CalculationRequest, RateTable, TaxYear, compute_breakdown};

    use super::*;

    fn breakdown(salary: Decimal) -> DeductionBreakdown {
        let request = CalculationRequest::new(salary, TaxYear::new(2024));
        compute_breakdown(&RateTable::builtin(), &request).unwrap()
    }

    fn line_containing<'a>(
        report: &'a str,
        needle: &str,
    ) -> &'a str {
        report
            .lines()
            .find(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no line containing '{needle}' in:\n{report}"))
    }

    #[test]
    fn render_report_has_year_header() {
        let report = render_report(&breakdown(dec!(3000000)));

        assert_eq!(report.lines().next(), Some("Take-home pay for 2024년"));
    }

    #[test]
    fn render_report_shows_salary_summary() {
        let report = render_report(&breakdown(dec!(3000000)));

        assert!(line_containing(&report, "Annual salary").ends_with("36,000,000원"));
        assert!(line_containing(&report, "Net monthly salary").ends_with("2,499,053원"));
        assert!(line_containing(&report, "Net annual salary").ends_with("29,988,638원"));
    }

    #[test]
    fn render_report_lists_every_deduction_with_share() {
        let report = render_report(&breakdown(dec!(3000000)));

        let pension = line_containing(&report, "국민연금");
        assert!(pension.contains("135,000원"));
        assert!(pension.ends_with("26.9%"));
        assert!(line_containing(&report, "장기요양보험").contains("27,247원"));
        assert!(line_containing(&report, "지방소득세").contains("9,000원"));
        assert!(line_containing(&report, "Total deductions").ends_with("500,947원"));
    }

    #[test]
    fn render_report_explains_formulas() {
        let report = render_report(&breakdown(dec!(3000000)));

        assert!(report.contains("Long-term care insurance = health insurance × 0.128"));
        assert!(report.contains("Income tax = (monthly salary - 1,500,000원) × 0.06"));
        assert!(report.contains("Local income tax = income tax × 0.10"));
    }

    #[test]
    fn render_report_shows_rebate_for_small_salary() {
        let report = render_report(&breakdown(dec!(1000000)));

        assert!(line_containing(&report, "(소득세)").contains("-30,000원"));
        assert!(line_containing(&report, "(지방소득세)").contains("-3,000원"));
    }

    #[test]
    fn render_report_omits_annual_lines_that_overflow() {
        let report = render_report(&breakdown(dec!(7000000000000000000000000000)));

        assert!(!report.contains("Annual salary"));
        assert!(line_containing(&report, "Monthly salary").ends_with("원"));
        assert!(line_containing(&report, "Net annual salary").ends_with("원"));
    }

    #[test]
    fn render_report_hides_shares_of_negligible_total() {
        // 2024 deductions nearly cancel out: the total is about 7e-23 won.
        let near_zero = breakdown(dec!(495043.836131689461101780563));
        assert_eq!(round_won(near_zero.total_deduction), Decimal::ZERO);

        let report = render_report(&near_zero);

        assert!(line_containing(&report, "국민연금").ends_with(NO_SHARE));
        assert!(line_containing(&report, "(지방소득세)").ends_with(NO_SHARE));
        assert!(line_containing(&report, "Total deductions").ends_with("0원"));
    }

    #[test]
    fn render_report_ends_with_notes() {
        let report = render_report(&breakdown(dec!(3000000)));

        assert!(report.contains("\nNotes\n"));
        assert!(report.trim_end().ends_with(NOTES[2]));
    }
}
