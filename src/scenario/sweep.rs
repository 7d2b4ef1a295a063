//! What-if grid over rates and contributions
//!
//! Every (rate, contribution) pair is projected independently against the
//! same base scenario. Cells are evaluated in parallel.

use super::ProjectionInput;
use crate::error::Result;
use crate::projection::{Outcome, ProjectionEngine};
use crate::rates::RateSpec;
use rayon::prelude::*;
use serde::Serialize;

/// Axes of the sweep plus the scenario they vary
#[derive(Debug, Clone, Serialize)]
pub struct SweepGrid {
    pub base: ProjectionInput,
    /// Rates in percent, on the base scenario's rate basis
    pub rates_pct: Vec<f64>,
    pub contributions: Vec<f64>,
}

/// Result of one grid cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepCell {
    pub rate_pct: f64,
    pub contribution: f64,
    pub outcome: Outcome,
    /// Periods needed to meet the target, `None` when unreachable
    pub periods: Option<u32>,
    pub final_balance: f64,
    pub total_interest: f64,
}

impl SweepGrid {
    /// Grid with `steps` evenly spaced values on each axis, ends inclusive
    pub fn linear(
        base: ProjectionInput,
        rate_range: (f64, f64),
        contribution_range: (f64, f64),
        steps: usize,
    ) -> Self {
        Self {
            base,
            rates_pct: linspace(rate_range.0, rate_range.1, steps),
            contributions: linspace(contribution_range.0, contribution_range.1, steps),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rates_pct.len() * self.contributions.len()
    }

    /// Scenario for one grid cell
    fn cell_input(&self, rate_pct: f64, contribution: f64) -> ProjectionInput {
        ProjectionInput {
            rate: RateSpec { value_pct: rate_pct, ..self.base.rate },
            contribution,
            ..self.base.clone()
        }
    }

    /// Project every cell. Rows follow `rates_pct` (outer) then
    /// `contributions` (inner). Fails if any cell's input is invalid.
    pub fn run(&self, engine: &ProjectionEngine) -> Result<Vec<SweepCell>> {
        // Resolve "today" once so every cell shares the same calendar
        let mut base = self.base.clone();
        base.start_date = Some(base.resolved_start_date());
        let grid = SweepGrid { base, ..self.clone() };

        let pairs: Vec<(f64, f64)> = grid
            .rates_pct
            .iter()
            .flat_map(|&r| grid.contributions.iter().map(move |&c| (r, c)))
            .collect();

        log::debug!("Running sweep over {} cells", pairs.len());

        pairs
            .par_iter()
            .map(|&(rate_pct, contribution)| -> Result<SweepCell> {
                let result = engine.project(&grid.cell_input(rate_pct, contribution))?;
                Ok(SweepCell {
                    rate_pct,
                    contribution,
                    outcome: result.outcome(),
                    periods: result.periods_to_target(),
                    final_balance: result.final_balance(),
                    total_interest: result.total_interest(),
                })
            })
            .collect()
    }
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
