use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use salary_cli::app::{self, SalaryInput, SalaryPeriod};
use salary_cli::{logging, report, utils};
use salary_core::TaxYear;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Take-home pay calculator.
///
/// Deducts national pension, health and long-term care insurance,
/// employment insurance, income tax and local income tax from a gross
/// salary and prints the monthly breakdown.
#[derive(Debug, Parser)]
#[command(name = "salary", version)]
struct Cli {
    /// Gross salary, e.g. `36,000,000` or `3000000원`.
    #[arg(short, long, allow_hyphen_values = true)]
    salary: String,

    /// Whether the salary is annual or monthly.
    #[arg(short, long, value_enum, default_value_t = SalaryPeriod::Annual)]
    period: SalaryPeriod,

    /// Tax year (`2024` or `2024년`). Defaults to the earliest configured year.
    #[arg(short, long)]
    year: Option<TaxYear>,

    /// Directory with `rate_sets.csv` and `tax_brackets.csv` to use instead
    /// of the built-in rates.
    #[arg(long)]
    rates_dir: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let table = app::load_rate_table(cli.rates_dir.as_deref())?;

    let amount = match utils::parse_amount(&cli.salary) {
        Ok(amount) => amount,
        Err(err) => {
            error!("{err}; re-run with a numeric --salary");
            return Ok(ExitCode::from(2));
        }
    };

    let input = SalaryInput {
        amount,
        period: cli.period,
        tax_year: cli.year.unwrap_or_else(|| table.current_year()),
    };

    match app::calculate(&table, &input) {
        Ok(breakdown) => {
            print!("{}", report::render_report(&breakdown));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match app::retry_hint(&table, &err) {
            Some(hint) => {
                error!("{err}; {hint}");
                Ok(ExitCode::from(2))
            }
            None => Err(err.into()),
        },
    }
}
