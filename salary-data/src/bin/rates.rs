use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salary_core::{RateSet, TaxYear};
use salary_data::RateSetLoader;

/// Validate a directory of rate tables and print what it contains.
///
/// The directory must hold two CSV files:
/// - rate_sets.csv: tax_year, national_pension_rate, health_insurance_rate,
///   long_term_care_rate, employment_insurance_rate, earned_income_deduction
/// - tax_brackets.csv: tax_year, upper_bound (empty for unlimited), rate
#[derive(Parser, Debug)]
#[command(name = "salary-rates")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing rate_sets.csv and tax_brackets.csv
    #[arg(short, long, default_value = "salary-data/data")]
    dir: PathBuf,

    /// Print the full bracket schedule for this year
    #[arg(short, long)]
    year: Option<TaxYear>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading rate tables from: {}", args.dir.display());

    let table = RateSetLoader::load_dir(&args.dir)
        .with_context(|| format!("Failed to load rate tables from: {}", args.dir.display()))?;

    for rate_set in table.rate_sets() {
        print_summary(rate_set);
    }

    if let Some(year) = args.year {
        let rate_set = table
            .lookup(year)
            .with_context(|| format!("No rates for {}", year.label()))?;
        print_schedule(rate_set);
    }

    println!("Rate tables are valid.");

    Ok(())
}

fn print_summary(rate_set: &RateSet) {
    let top_rate = rate_set
        .tax_brackets
        .last()
        .map(|bracket| bracket.rate.to_string())
        .unwrap_or_default();

    println!(
        "{}: deduction {}, {} brackets, top rate {}",
        rate_set.tax_year.label(),
        rate_set.earned_income_deduction,
        rate_set.tax_brackets.len(),
        top_rate
    );
}

fn print_schedule(rate_set: &RateSet) {
    println!("Bracket schedule for {}:", rate_set.tax_year.label());
    for bracket in &rate_set.tax_brackets {
        match bracket.upper_bound {
            Some(bound) => println!("  up to {bound:>12}: {}", bracket.rate),
            None => println!("  {:>18}: {}", "above", bracket.rate),
        }
    }
}
