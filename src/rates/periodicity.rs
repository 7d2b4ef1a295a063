//! Compounding/contribution cadence

use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cadence at which interest compounds and contributions are added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodicityUnit {
    Monthly,
    Quarterly,
    #[serde(alias = "semi-annual", alias = "semi_annual")]
    Semiannual,
    #[serde(alias = "yearly")]
    Annual,
}

impl PeriodicityUnit {
    pub const ALL: [PeriodicityUnit; 4] = [
        PeriodicityUnit::Monthly,
        PeriodicityUnit::Quarterly,
        PeriodicityUnit::Semiannual,
        PeriodicityUnit::Annual,
    ];

    /// Calendar months spanned by one period
    pub const fn months(self) -> u32 {
        match self {
            PeriodicityUnit::Monthly => 1,
            PeriodicityUnit::Quarterly => 3,
            PeriodicityUnit::Semiannual => 6,
            PeriodicityUnit::Annual => 12,
        }
    }

    /// Number of periods in a calendar year
    pub const fn periods_per_year(self) -> u32 {
        12 / self.months()
    }

    /// Plural label used in table headers and summaries
    pub const fn label(self) -> &'static str {
        match self {
            PeriodicityUnit::Monthly => "months",
            PeriodicityUnit::Quarterly => "quarters",
            PeriodicityUnit::Semiannual => "semesters",
            PeriodicityUnit::Annual => "years",
        }
    }

    /// Singular form of [`label`](Self::label)
    pub const fn singular_label(self) -> &'static str {
        match self {
            PeriodicityUnit::Monthly => "month",
            PeriodicityUnit::Quarterly => "quarter",
            PeriodicityUnit::Semiannual => "semester",
            PeriodicityUnit::Annual => "year",
        }
    }

    /// Periods covered by a horizon of `years`, saturating at `u32::MAX`
    pub const fn periods_in_years(self, years: u32) -> u32 {
        years.saturating_mul(self.periods_per_year())
    }
}

impl fmt::Display for PeriodicityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodicityUnit::Monthly => "monthly",
            PeriodicityUnit::Quarterly => "quarterly",
            PeriodicityUnit::Semiannual => "semiannual",
            PeriodicityUnit::Annual => "annual",
        };
        f.write_str(name)
    }
}

impl FromStr for PeriodicityUnit {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(PeriodicityUnit::Monthly),
            "quarterly" | "quarter" | "q" => Ok(PeriodicityUnit::Quarterly),
            "semiannual" | "semi-annual" | "semi_annual" | "semester" => {
                Ok(PeriodicityUnit::Semiannual)
            }
            "annual" | "yearly" | "year" | "y" => Ok(PeriodicityUnit::Annual),
            _ => Err(ProjectionError::UnknownPeriodicity(s.to_string())),
        }
    }
}
