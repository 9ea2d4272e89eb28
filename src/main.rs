//! PrimeRendit Engine CLI
//!
//! Command-line interface for running buy-to-let investment projections

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use primerendit_engine::{
    params, report, ParameterSet, ProjectionEngine, ResultsSummary,
};

/// Run an investment projection from the demo preset or a share snapshot
#[derive(Parser, Debug)]
#[command(name = "primerendit", version, about = "PrimeRendit buy-to-let projection engine")]
struct Cli {
    /// Run the built-in demo property (the default when no snapshot is given)
    #[arg(long)]
    demo: bool,

    /// Load parameters from a share-snapshot JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "demo")]
    snapshot: Option<PathBuf>,

    /// Write the cashflow schedule to a CSV file
    #[arg(long, value_name = "FILE")]
    schedule_csv: Option<PathBuf>,

    /// Write the amortization schedule to a CSV file
    #[arg(long, value_name = "FILE")]
    amortization_csv: Option<PathBuf>,

    /// Print the shareable text summary instead of the year table
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let parameters = match (&cli.snapshot, cli.demo) {
        (Some(path), false) => {
            let snapshot = params::load_snapshot(path)
                .with_context(|| format!("failed to load snapshot {}", path.display()))?;
            params::clamp(snapshot.inputs)
        }
        _ => ParameterSet::demo_data(),
    };

    if !params::is_ready(&parameters) {
        bail!("snapshot is not ready to calculate: priceProperty and coldRentMonthly must be > 0");
    }

    let results = ProjectionEngine::new(parameters.clone()).run();

    if cli.summary {
        print!("{}", report::text_summary(&parameters, &results));
    } else {
        print_results(&parameters, &results);
    }

    if let Some(path) = &cli.schedule_csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report::write_schedule_csv(file, &results)
            .with_context(|| format!("failed to write schedule CSV {}", path.display()))?;
        println!("\nCashflow schedule written to: {}", path.display());
    }

    if let Some(path) = &cli.amortization_csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report::write_amortization_csv(file, &results)
            .with_context(|| format!("failed to write amortization CSV {}", path.display()))?;
        println!("Amortization schedule written to: {}", path.display());
    }

    Ok(())
}

fn print_results(parameters: &ParameterSet, results: &ResultsSummary) {
    println!("PrimeRendit Engine v0.1.0");
    println!("=========================\n");

    println!("Objekt:");
    println!("  Kaufpreis Immobilie: {:>10.0} €", parameters.acquisition.price_property);
    println!("  Kaufnebenkosten:     {:>10.0} €", results.ancillary_costs);
    println!("  Gesamtkosten:        {:>10.0} €", results.total_costs);
    println!("  Eigenkapital:        {:>10.0} €", results.equity);
    println!("  Darlehen:            {:>10.0} €", results.loan0);
    println!("  AfA p.a.:            {:>10.0} €", results.afa_annual);
    println!();

    println!("Projektion ({} Jahre):", results.rows.len());
    println!(
        "{:>5} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>12} {:>14}",
        "Jahr", "Netto-Miete", "Annuität", "Zinsen", "Tilgung", "Steuern", "CF n. St.", "Restschuld", "Nettovermögen"
    );
    println!("{}", "-".repeat(101));

    for row in results.rows.iter().take(10) {
        println!(
            "{:>5} {:>12.0} {:>10.0} {:>10.0} {:>10.0} {:>10.0} {:>10.0} {:>12.0} {:>14.0}",
            row.year,
            row.net_rent,
            row.annuity,
            row.interest,
            row.principal,
            row.tax,
            row.cf_after_tax,
            row.remaining_loan,
            row.net_wealth,
        );
    }

    if results.rows.len() > 10 {
        println!("... ({} more years)", results.rows.len() - 10);
    }

    let coc_display = if results.coc_return.is_finite() {
        format!("{:.1}%", results.coc_return * 100.0)
    } else {
        "∞".to_string()
    };

    println!("\nKennzahlen:");
    println!("  Brutto-Rendite:          {:.2}%", results.brutto_yield * 100.0);
    println!("  Cashflow p.M. (Jahr 1):  {:.0} €", results.monthly_cf1);
    println!("  EK-Rendite gesamt:       {}", coc_display);
    println!("  Gesamtgewinn:            {:.0} €", results.total_profit);
    println!("  Marktwert (Ende):        {:.0} €", results.market_value_end);
    println!("  Restschuld (Ende):       {:.0} €", results.remaining_loan_end);
    println!("  Kum. Cashflow (Ende):    {:.0} €", results.cumulated_cash_end);
}
