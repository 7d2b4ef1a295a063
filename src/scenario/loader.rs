//! Load named scenarios from CSV
//!
//! Expected header:
//! `name,target,initial_balance,contribution,rate_pct,rate_basis,periodicity,start_date`
//!
//! `rate_basis` is `annual` (default when blank) or `per_period`;
//! `start_date` is an optional ISO date.

use super::ProjectionInput;
use crate::error::{ProjectionError, Result};
use crate::rates::{PeriodicityUnit, RateBasis, RateSpec};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A scenario with the label it was given in the input file
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub input: ProjectionInput,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    name: String,
    target: f64,
    #[serde(default)]
    initial_balance: f64,
    #[serde(default)]
    contribution: f64,
    rate_pct: f64,
    #[serde(default)]
    rate_basis: String,
    periodicity: String,
    #[serde(default)]
    start_date: Option<String>,
}

impl ScenarioRecord {
    fn into_scenario(self, row: usize) -> Result<NamedScenario> {
        let invalid = |message: String| ProjectionError::InvalidScenario { row, message };

        let periodicity: PeriodicityUnit = self
            .periodicity
            .parse()
            .map_err(|e: ProjectionError| invalid(e.to_string()))?;
        let basis = RateBasis::parse_with(&self.rate_basis, periodicity)
            .map_err(|e| invalid(e.to_string()))?;
        let start_date = match self.start_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|e| invalid(format!("bad start_date '{}': {}", raw, e)))?,
            ),
        };

        let input = ProjectionInput {
            target: self.target,
            initial_balance: self.initial_balance,
            contribution: self.contribution,
            rate: RateSpec { value_pct: self.rate_pct, basis },
            periodicity,
            start_date,
        };
        input.validate().map_err(|e| invalid(e.to_string()))?;

        Ok(NamedScenario { name: self.name, input })
    }
}

/// Load scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut scenarios = Vec::new();
    for (idx, record) in csv_reader.deserialize::<ScenarioRecord>().enumerate() {
        let row = idx + 1;
        let record = record.map_err(|e| ProjectionError::InvalidScenario {
            row,
            message: e.to_string(),
        })?;
        scenarios.push(record.into_scenario(row)?);
    }

    log::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let file = File::open(path.as_ref())?;
    load_scenarios_from_reader(file)
}
