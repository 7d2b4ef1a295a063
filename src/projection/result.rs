//! Projection output: period rows and the terminal state

use crate::rates::PeriodicityUnit;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodRecord {
    /// 1-based, contiguous
    pub period: u32,
    pub date: NaiveDate,
    pub opening_balance: f64,
    /// Rate applied this period, in percent
    pub periodic_rate_pct: f64,
    pub interest: f64,
    pub contribution: f64,
    pub closing_balance: f64,
}

/// Why the accumulation loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Balance met or exceeded the target (possibly before the first period)
    TargetReached,
    /// Horizon cap hit with the target still out of reach
    PeriodCapExceeded,
}

/// The three ways a projection can end, as presented to a user
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Initial balance already meets the target; no periods were run
    AlreadyMet,
    /// Target met at the end of `periods`, the period dated `date`
    Reached { periods: u32, date: NaiveDate },
    /// Target not met within `horizon_periods`
    Unreachable { horizon_periods: u32 },
}

/// Immutable result of one projection request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    records: Vec<PeriodRecord>,
    termination: TerminationReason,
    target: f64,
    initial_balance: f64,
    periodicity: PeriodicityUnit,
    max_periods: u32,
}

impl ProjectionResult {
    pub(crate) fn new(
        records: Vec<PeriodRecord>,
        termination: TerminationReason,
        target: f64,
        initial_balance: f64,
        periodicity: PeriodicityUnit,
        max_periods: u32,
    ) -> Self {
        Self {
            records,
            termination,
            target,
            initial_balance,
            periodicity,
            max_periods,
        }
    }

    /// Rows in chronological order
    pub fn records(&self) -> &[PeriodRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&PeriodRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    pub fn periodicity(&self) -> PeriodicityUnit {
        self.periodicity
    }

    /// Iteration ceiling that applied to this run
    pub fn max_periods(&self) -> u32 {
        self.max_periods
    }

    pub fn target_reached(&self) -> bool {
        self.termination == TerminationReason::TargetReached
    }

    /// Closing balance of the last period, or the initial balance when no period ran
    pub fn final_balance(&self) -> f64 {
        self.records
            .last()
            .map(|r| r.closing_balance)
            .unwrap_or(self.initial_balance)
    }

    pub fn total_interest(&self) -> f64 {
        self.records.iter().map(|r| r.interest).sum()
    }

    pub fn total_contributions(&self) -> f64 {
        self.records.iter().map(|r| r.contribution).sum()
    }

    /// Number of periods needed to meet the target, if it was met
    pub fn periods_to_target(&self) -> Option<u32> {
        match self.termination {
            TerminationReason::TargetReached => Some(self.records.len() as u32),
            TerminationReason::PeriodCapExceeded => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match (self.termination, self.records.last()) {
            (TerminationReason::PeriodCapExceeded, _) => Outcome::Unreachable {
                horizon_periods: self.max_periods,
            },
            (TerminationReason::TargetReached, None) => Outcome::AlreadyMet,
            (TerminationReason::TargetReached, Some(last)) => Outcome::Reached {
                periods: last.period,
                date: last.date,
            },
        }
    }
}
