//! Project a single savings scenario
//!
//! Prints a summary line and the period table; optionally writes the rows
//! as CSV and chart series as JSON.
//!
//! ```bash
//! project --target 50000 --initial 1000 --contribution 250 --rate 5 --periodicity monthly
//! project --config scenario.json --csv rows.csv --chart chart.json
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use savings_projection::report::{self, ChartSeries, TableStyle};
use savings_projection::{
    DateStepping, PeriodicityUnit, ProjectionConfig, ProjectionEngine, ProjectionInput,
    ProjectionRequest, RateBasisTag, RateSpec,
};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "project", about = "Project how long it takes to reach a savings target")]
struct Args {
    /// JSON scenario file (ProjectionRequest); replaces the scenario flags
    #[arg(
        long,
        conflicts_with_all = [
            "target", "initial", "contribution", "rate", "rate_basis", "periodicity", "start_date",
        ]
    )]
    config: Option<PathBuf>,

    /// Balance to reach
    #[arg(long, required_unless_present = "config")]
    target: Option<f64>,

    /// Starting balance
    #[arg(long, default_value_t = 0.0)]
    initial: f64,

    /// Amount added every period
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,

    /// Interest rate in percent
    #[arg(long, required_unless_present = "config")]
    rate: Option<f64>,

    /// `annual`, `per-period` (quoted per `--periodicity`), or the
    /// periodicity the rate is quoted per (`monthly`, ...)
    #[arg(long, default_value = "annual")]
    rate_basis: RateBasisTag,

    #[arg(long, default_value = "annual")]
    periodicity: PeriodicityUnit,

    /// First period date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Safety horizon in years
    #[arg(long)]
    horizon_years: Option<u32>,

    /// `calendar` or `thirty-day`
    #[arg(long)]
    date_stepping: Option<DateStepping>,

    /// Symbol printed before amounts in the table
    #[arg(long, default_value = "€")]
    currency: String,

    /// Write period rows as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write chart series as JSON
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Print the full result as JSON instead of the table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn request(&self) -> Result<ProjectionRequest> {
        let mut request = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                ProjectionRequest::from_json(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => {
                let target = self.target.context("--target is required")?;
                let rate = self.rate.context("--rate is required")?;
                let mut input = ProjectionInput::new(
                    target,
                    self.initial,
                    self.contribution,
                    RateSpec { value_pct: rate, basis: self.rate_basis.resolve(self.periodicity) },
                    self.periodicity,
                );
                input.start_date = self.start_date;
                ProjectionRequest { input, config: ProjectionConfig::default() }
            }
        };

        if let Some(years) = self.horizon_years {
            request.config.horizon_years = years;
        }
        if let Some(stepping) = self.date_stepping {
            request.config.date_stepping = stepping;
        }
        Ok(request)
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
    let request = args.request()?;

    let engine = ProjectionEngine::new(request.config.clone());
    let result = engine.project(&request.input)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::describe(&result));
        if !result.is_empty() {
            println!();
            let style = TableStyle {
                currency_symbol: args.currency.clone(),
                ..Default::default()
            };
            print!("{}", report::render_table(&result, &style));
            println!(
                "\nTotal contributions: {:.2}  Total interest: {:.2}",
                result.total_contributions(),
                result.total_interest()
            );
        }
    }

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report::write_csv(&result, BufWriter::new(file))?;
        log::info!("Wrote {} rows to {}", result.len(), path.display());
    }

    if let Some(path) = &args.chart {
        let json = ChartSeries::from_result(&result).to_json()?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote chart series to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use savings_projection::RateBasis;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("project").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_per_period_basis_uses_periodicity() {
        let args = parse(&[
            "--target", "100", "--rate", "1", "--rate-basis", "per-period",
            "--periodicity", "monthly", "--date-stepping", "thirty-day",
        ]);
        let request = args.request().unwrap();
        assert_eq!(request.input.rate.basis, RateBasis::PerPeriod(PeriodicityUnit::Monthly));
        assert_eq!(request.config.date_stepping, DateStepping::ThirtyDayMonths);
    }

    #[test]
    fn test_basis_tokens_accepted() {
        for (token, expected) in [
            ("annual", RateBasis::Annual),
            ("per_period", RateBasis::PerPeriod(PeriodicityUnit::Quarterly)),
            ("monthly", RateBasis::PerPeriod(PeriodicityUnit::Monthly)),
            ("semiannual", RateBasis::PerPeriod(PeriodicityUnit::Semiannual)),
        ] {
            let args = parse(&[
                "--target", "100", "--rate", "1", "--rate-basis", token,
                "--periodicity", "quarterly",
            ]);
            assert_eq!(args.request().unwrap().input.rate.basis, expected, "token {}", token);
        }
    }

    #[test]
    fn test_unknown_basis_rejected() {
        let parsed = Args::try_parse_from([
            "project", "--target", "100", "--rate", "1", "--rate-basis", "weekly",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_calendar_stepping_token() {
        let args = parse(&["--target", "100", "--rate", "1", "--date-stepping", "calendar"]);
        let request = args.request().unwrap();
        assert_eq!(request.config.date_stepping, DateStepping::CalendarMonths);
        assert_eq!(request.input.rate.basis, RateBasis::Annual);
    }
}
