use rust_decimal::Decimal;
use salary_core::calculations::common::{round_rate, round_won};
use thiserror::Error;

/// Currency suffix used when displaying and accepted when parsing amounts.
pub const WON_SUFFIX: &str = "원";

/// Error returned when a salary string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("salary is required")]
    Empty,

    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Normalizes input for decimal parsing: trims whitespace, drops a trailing
/// `원` and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_suffix(WON_SUFFIX)
        .unwrap_or(trimmed)
        .trim()
        .replace(',', "")
}

/// Parses a user-entered amount such as `"36,000,000"` or `"3000000원"`.
///
/// Unlike optional form fields, an empty amount is an error.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    normalized
        .parse()
        .map_err(|e| ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        })
}

/// Formats an amount as whole won with thousands separators, e.g.
/// `"2,499,053원"`.
pub fn format_won(amount: Decimal) -> String {
    let rounded = round_won(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}{WON_SUFFIX}")
}

/// Formats a rate with a fixed number of decimal places, e.g. `"0.071"`.
pub fn format_rate(
    rate: Decimal,
    places: u32,
) -> String {
    format!("{:.*}", places as usize, round_rate(rate, places))
}

/// Shown in place of a share that cannot be expressed as a percentage.
pub const NO_SHARE: &str = "-";

/// Formats a fraction as a percentage with one decimal place, e.g. `"26.9%"`.
pub fn format_percent(fraction: Decimal) -> String {
    match fraction.checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => format!("{:.1}%", round_rate(percent, 1)),
        None => NO_SHARE.to_string(),
    }
}
