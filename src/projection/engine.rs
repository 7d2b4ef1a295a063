//! Period-by-period accumulation towards a target balance

use super::calendar::DateStepping;
use super::result::{PeriodRecord, ProjectionResult, TerminationReason};
use super::{DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS};
use crate::error::{ProjectionError, Result};
use crate::scenario::ProjectionInput;
use log::debug;
use serde::{Deserialize, Serialize};

/// Engine-wide settings that are not part of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Safety horizon in years; the loop never runs past it
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    #[serde(default)]
    pub date_stepping: DateStepping,
}

fn default_horizon_years() -> u32 { DEFAULT_HORIZON_YEARS }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            date_stepping: DateStepping::CalendarMonths,
        }
    }
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<()> {
        if (1..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            Ok(())
        } else {
            Err(ProjectionError::InvalidHorizon(self.horizon_years))
        }
    }
}

/// Runs projections. Holds only configuration, so one engine can be shared
/// across threads and reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Iteration ceiling for `input`: the horizon expressed in its periods
    pub fn max_periods(&self, input: &ProjectionInput) -> u32 {
        input.periodicity.periods_in_years(self.config.horizon_years)
    }

    /// Project `input` until the target is met or the horizon is exhausted.
    ///
    /// Input is validated up front; on error no rows are produced.
    /// A target at or below the initial balance yields an empty result
    /// terminated with [`TerminationReason::TargetReached`].
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        self.config.validate()?;
        input.validate()?;

        let periodicity = input.periodicity;
        let periodic_rate = input.rate.periodic_pct(periodicity)?;
        let max_periods = self.max_periods(input);
        let start = input.resolved_start_date();
        let stepping = self.config.date_stepping;

        if input.initial_balance >= input.target {
            debug!("Target {:.2} already met by initial balance", input.target);
            return Ok(ProjectionResult::new(
                Vec::new(),
                TerminationReason::TargetReached,
                input.target,
                input.initial_balance,
                periodicity,
                max_periods,
            ));
        }

        // Fail before the loop if the horizon runs off the calendar
        stepping.date_for_period(start, periodicity, max_periods)?;

        debug!(
            "Projecting target={:.2} initial={:.2} contribution={:.2} \
             rate={:.6}% per {} (cap {} periods)",
            input.target,
            input.initial_balance,
            input.contribution,
            periodic_rate,
            periodicity.singular_label(),
            max_periods
        );

        let mut records = Vec::new();
        let mut balance = input.initial_balance;
        let mut period = 1u32;

        while balance < input.target && period <= max_periods {
            let interest = balance * (periodic_rate / 100.0);
            let closing_balance = balance + interest + input.contribution;

            records.push(PeriodRecord {
                period,
                date: stepping.date_for_period(start, periodicity, period)?,
                opening_balance: balance,
                periodic_rate_pct: periodic_rate,
                interest,
                contribution: input.contribution,
                closing_balance,
            });

            balance = closing_balance;
            period += 1;
        }

        let termination = if balance >= input.target {
            TerminationReason::TargetReached
        } else {
            TerminationReason::PeriodCapExceeded
        };

        debug!(
            "Projection finished after {} {}: {:?}, final balance {:.2}",
            records.len(),
            periodicity.label(),
            termination,
            balance
        );

        Ok(ProjectionResult::new(
            records,
            termination,
            input.target,
            input.initial_balance,
            periodicity,
            max_periods,
        ))
    }
}
