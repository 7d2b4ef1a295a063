//! Run every scenario in a CSV file
//!
//! Outputs one summary row per scenario, in input order

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use savings_projection::projection::DEFAULT_HORIZON_YEARS;
use savings_projection::report;
use savings_projection::scenario::{load_scenarios, NamedScenario};
use savings_projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Project a CSV of savings scenarios")]
struct Args {
    /// Scenario CSV with columns name, target, initial_balance, contribution,
    /// rate_pct, rate_basis, periodicity, start_date
    input: PathBuf,

    /// Output CSV; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    horizon_years: u32,
}

/// Summary row per scenario
#[derive(Debug, Serialize)]
struct BatchRow {
    name: String,
    periodicity: String,
    reached: bool,
    periods: Option<u32>,
    final_date: Option<String>,
    final_balance: String,
    total_contributions: String,
    total_interest: String,
    summary: String,
}

impl BatchRow {
    fn new(scenario: &NamedScenario, result: &ProjectionResult) -> Self {
        Self {
            name: scenario.name.clone(),
            periodicity: result.periodicity().to_string(),
            reached: result.target_reached(),
            periods: result.periods_to_target(),
            final_date: result.records().last().map(|r| r.date.to_string()),
            final_balance: format!("{:.2}", result.final_balance()),
            total_contributions: format!("{:.2}", result.total_contributions()),
            total_interest: format!("{:.2}", result.total_interest()),
            summary: report::describe(result),
        }
    }
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
    let start = Instant::now();

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading {}", args.input.display()))?;

    let engine = ProjectionEngine::new(ProjectionConfig {
        horizon_years: args.horizon_years,
        ..Default::default()
    });

    let proj_start = Instant::now();
    let rows: Vec<BatchRow> = scenarios
        .par_iter()
        .map(|scenario| -> Result<BatchRow> {
            let result = engine
                .project(&scenario.input)
                .with_context(|| format!("scenario '{}'", scenario.name))?;
            Ok(BatchRow::new(scenario, &result))
        })
        .collect::<Result<_>>()?;
    log::info!("Projections complete in {:?}", proj_start.elapsed());

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = csv::Writer::from_writer(sink);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let reached = rows.iter().filter(|r| r.reached).count();
    log::info!(
        "{} of {} scenarios reach their target (total time {:?})",
        reached,
        rows.len(),
        start.elapsed()
    );
    Ok(())
}
