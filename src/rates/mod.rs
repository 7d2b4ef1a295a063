//! Interest rate specification and periodicity arithmetic

pub mod conversion;
mod periodicity;

pub use conversion::{annual_to_periodic, periodic_to_annual};
pub use periodicity::PeriodicityUnit;

use crate::error::{ensure_non_negative, ProjectionError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a quoted rate is relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    /// Annual effective rate
    Annual,
    /// Rate earned over one period of the given cadence
    PerPeriod(PeriodicityUnit),
}

impl RateBasis {
    fn periods_per_year(self) -> u32 {
        match self {
            RateBasis::Annual => 1,
            RateBasis::PerPeriod(unit) => unit.periods_per_year(),
        }
    }

    /// Parse a basis tag, resolving `per_period` against `periodicity`.
    /// A blank tag means annual.
    pub fn parse_with(tag: &str, periodicity: PeriodicityUnit) -> Result<Self> {
        if tag.trim().is_empty() {
            return Ok(RateBasis::Annual);
        }
        Ok(tag.parse::<RateBasisTag>()?.resolve(periodicity))
    }
}

/// Rate basis as written on a command line or in a CSV cell.
///
/// `per-period` only becomes a [`RateBasis`] once the projection's
/// periodicity is known; see [`resolve`](Self::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBasisTag {
    /// `annual`, `yearly`
    Annual,
    /// `per-period`, `per_period`, `periodic`
    PerPeriod,
    /// A periodicity name such as `monthly`: the rate is quoted per that cadence
    Cadence(PeriodicityUnit),
}

impl RateBasisTag {
    pub fn resolve(self, periodicity: PeriodicityUnit) -> RateBasis {
        match self {
            RateBasisTag::Annual => RateBasis::Annual,
            RateBasisTag::PerPeriod => RateBasis::PerPeriod(periodicity),
            RateBasisTag::Cadence(unit) => RateBasis::PerPeriod(unit),
        }
    }
}

/// An interest rate in percent together with the basis it is quoted on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSpec {
    pub value_pct: f64,
    #[serde(default = "default_basis")]
    pub basis: RateBasis,
}

fn default_basis() -> RateBasis { RateBasis::Annual }

impl RateSpec {
    /// Annual effective rate, e.g. `RateSpec::annual(5.0)` for 5% a year
    pub fn annual(value_pct: f64) -> Self {
        Self { value_pct, basis: RateBasis::Annual }
    }

    /// Rate earned per period of `unit`
    pub fn per_period(value_pct: f64, unit: PeriodicityUnit) -> Self {
        Self { value_pct, basis: RateBasis::PerPeriod(unit) }
    }

    /// Reject negative or non-finite rates
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("rate", self.value_pct).map(|_| ())
    }

    /// Annual effective rate in percent
    pub fn annual_pct(&self) -> Result<f64> {
        periodic_to_annual(self.value_pct, self.basis.periods_per_year())
    }

    /// Rate applied once per period of `periodicity`, in percent.
    ///
    /// Returns the quoted value untouched when it is already expressed
    /// on that cadence.
    pub fn periodic_pct(&self, periodicity: PeriodicityUnit) -> Result<f64> {
        let same_cadence = match self.basis {
            RateBasis::Annual => periodicity == PeriodicityUnit::Annual,
            RateBasis::PerPeriod(unit) => unit == periodicity,
        };
        if same_cadence {
            self.validate()?;
            return Ok(self.value_pct);
        }
        annual_to_periodic(self.annual_pct()?, periodicity.periods_per_year())
    }
}

impl FromStr for RateBasisTag {
    type Err = ProjectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" | "yearly" => Ok(RateBasisTag::Annual),
            "per-period" | "per_period" | "periodic" => Ok(RateBasisTag::PerPeriod),
            other => other
                .parse::<PeriodicityUnit>()
                .map(RateBasisTag::Cadence)
                .map_err(|_| ProjectionError::UnknownRateBasis(s.to_string())),
        }
    }
}
