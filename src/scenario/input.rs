//! Projection request types

use crate::error::{ensure_non_negative, Result};
use crate::projection::ProjectionConfig;
use crate::rates::{PeriodicityUnit, RateSpec};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parameters of one savings scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Balance that ends the projection
    pub target: f64,

    #[serde(default)]
    pub initial_balance: f64,

    /// Amount added at the end of every period
    #[serde(default)]
    pub contribution: f64,

    pub rate: RateSpec,

    #[serde(default = "default_periodicity")]
    pub periodicity: PeriodicityUnit,

    /// Date of the first period; today's local date when absent
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

fn default_periodicity() -> PeriodicityUnit { PeriodicityUnit::Annual }

impl ProjectionInput {
    pub fn new(
        target: f64,
        initial_balance: f64,
        contribution: f64,
        rate: RateSpec,
        periodicity: PeriodicityUnit,
    ) -> Self {
        Self {
            target,
            initial_balance,
            contribution,
            rate,
            periodicity,
            start_date: None,
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Check every amount and the rate are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("target", self.target)?;
        ensure_non_negative("initial balance", self.initial_balance)?;
        ensure_non_negative("contribution", self.contribution)?;
        self.rate.validate()
    }

    /// Start date, falling back to today
    pub fn resolved_start_date(&self) -> NaiveDate {
        self.start_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// JSON request shape accepted by the CLI `--config` option and the Lambda handler
///
/// ```json
/// {
///   "target": 50000, "initial_balance": 1000, "contribution": 250,
///   "rate": { "value_pct": 5.0 }, "periodicity": "monthly",
///   "config": { "horizon_years": 40 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub input: ProjectionInput,

    #[serde(default)]
    pub config: ProjectionConfig,
}

impl ProjectionRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::DateStepping;

    #[test]
    fn test_validate_rejects_negatives() {
        let rate = RateSpec::annual(5.0);
        let base = ProjectionInput::new(1000.0, 0.0, 10.0, rate, PeriodicityUnit::Monthly);
        assert!(base.validate().is_ok());

        let mut bad = base.clone();
        bad.initial_balance = -1.0;
        assert!(bad.validate().is_err());

        let mut bad = base.clone();
        bad.contribution = f64::NAN;
        assert!(bad.validate().is_err());

        let mut bad = base;
        bad.rate = RateSpec::annual(-0.5);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_explicit_start_date_wins() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let rate = RateSpec::annual(0.0);
        let input = ProjectionInput::new(1.0, 0.0, 1.0, rate, PeriodicityUnit::Annual)
            .with_start_date(date);
        assert_eq!(input.resolved_start_date(), date);
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"target": 500, "rate": {"value_pct": 3}}"#;
        let request = ProjectionRequest::from_json(json).unwrap();
        assert_eq!(request.input.initial_balance, 0.0);
        assert_eq!(request.input.contribution, 0.0);
        assert_eq!(request.input.periodicity, PeriodicityUnit::Annual);
        assert_eq!(request.input.start_date, None);
        assert_eq!(request.config, ProjectionConfig::default());
    }

    #[test]
    fn test_request_full() {
        let json = r#"{
            "target": 50000, "initial_balance": 1000, "contribution": 250,
            "rate": {"value_pct": 0.4, "basis": {"per_period": "monthly"}},
            "periodicity": "monthly", "start_date": "2025-01-15",
            "config": {"horizon_years": 40, "date_stepping": "thirty_day_months"}
        }"#;
        let request = ProjectionRequest::from_json(json).unwrap();
        assert_eq!(request.input.rate, RateSpec::per_period(0.4, PeriodicityUnit::Monthly));
        assert_eq!(request.input.start_date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(request.config.horizon_years, 40);
        assert_eq!(request.config.date_stepping, DateStepping::ThirtyDayMonths);
    }

    #[test]
    fn test_request_missing_target_is_error() {
        assert!(ProjectionRequest::from_json(r#"{"rate": {"value_pct": 3}}"#).is_err());
    }
}
