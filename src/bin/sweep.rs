//! What-if sweep: periods to target across a grid of rates and contributions
//!
//! Prints a matrix (rates down, contributions across) of the periods needed
//! to hit the target; `-` marks cells that never get there.

use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use savings_projection::scenario::{SweepCell, SweepGrid};
use savings_projection::{
    PeriodicityUnit, ProjectionConfig, ProjectionEngine, ProjectionInput, RateBasisTag, RateSpec,
};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "sweep", about = "Sweep rates and contributions for a savings target")]
struct Args {
    #[arg(long)]
    target: f64,

    #[arg(long, default_value_t = 0.0)]
    initial: f64,

    #[arg(long, default_value = "annual")]
    rate_basis: RateBasisTag,

    #[arg(long, default_value = "monthly")]
    periodicity: PeriodicityUnit,

    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Lowest and highest rate in percent
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], default_values_t = [0.0, 10.0])]
    rates: Vec<f64>,

    /// Lowest and highest contribution
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], required = true)]
    contributions: Vec<f64>,

    /// Values per axis
    #[arg(long, default_value_t = 6)]
    steps: usize,

    /// Write every cell as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    ensure!(args.steps > 0, "--steps must be at least 1");

    let mut base = ProjectionInput::new(
        args.target,
        args.initial,
        0.0,
        RateSpec { value_pct: 0.0, basis: args.rate_basis.resolve(args.periodicity) },
        args.periodicity,
    );
    base.start_date = args.start_date;

    let grid = SweepGrid::linear(
        base,
        (args.rates[0], args.rates[1]),
        (args.contributions[0], args.contributions[1]),
        args.steps,
    );

    let start = Instant::now();
    let engine = ProjectionEngine::new(ProjectionConfig::default());
    let cells = grid.run(&engine)?;
    log::info!("Evaluated {} cells in {:?}", cells.len(), start.elapsed());

    print_matrix(&grid, &cells, args.periodicity);

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record([
            "rate_pct",
            "contribution",
            "periods",
            "final_balance",
            "total_interest",
        ])?;
        for cell in &cells {
            writer.write_record([
                format!("{:.4}", cell.rate_pct),
                format!("{:.2}", cell.contribution),
                cell.periods.map(|p| p.to_string()).unwrap_or_default(),
                format!("{:.2}", cell.final_balance),
                format!("{:.2}", cell.total_interest),
            ])?;
        }
        writer.flush()?;
        println!("\nOutput written to {}", path.display());
    }

    Ok(())
}

fn print_matrix(grid: &SweepGrid, cells: &[SweepCell], periodicity: PeriodicityUnit) {
    println!(
        "{} to reach {:.2} (rows: rate %, columns: contribution)",
        periodicity.label(),
        grid.base.target
    );
    print!("{:>10}", "");
    for c in &grid.contributions {
        print!(" {:>10.2}", c);
    }
    println!();

    for row in cells.chunks(grid.contributions.len()) {
        print!("{:>9.2}%", row[0].rate_pct);
        for cell in row {
            match cell.periods {
                Some(p) => print!(" {:>10}", p),
                None => print!(" {:>10}", "-"),
            }
        }
        println!();
    }
}
