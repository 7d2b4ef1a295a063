//! Period dating

use crate::error::{ProjectionError, Result};
use crate::rates::PeriodicityUnit;
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the date of each period is derived from the start date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStepping {
    /// True calendar months, anchored on the start date.
    /// Jan 31 steps to Feb 28 (or 29), then Mar 31.
    #[default]
    CalendarMonths,
    /// Fixed 30 days per month. Drifts against the calendar
    /// (12 steps land 5 or 6 days short of a year).
    ThirtyDayMonths,
}

impl DateStepping {
    /// Date of the 1-based `period`. Period 1 is the start date itself.
    pub fn date_for_period(
        self,
        start: NaiveDate,
        periodicity: PeriodicityUnit,
        period: u32,
    ) -> Result<NaiveDate> {
        let months = periodicity.months() * period.saturating_sub(1);
        let date = match self {
            DateStepping::CalendarMonths => start.checked_add_months(Months::new(months)),
            DateStepping::ThirtyDayMonths => {
                start.checked_add_signed(Duration::days(30 * i64::from(months)))
            }
        };
        date.ok_or(ProjectionError::DateOutOfRange(start))
    }
}

impl FromStr for DateStepping {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" | "calendar_months" | "calendar-months" => Ok(DateStepping::CalendarMonths),
            "thirty-day" | "thirty_day" | "30-day" | "thirty_day_months" => {
                Ok(DateStepping::ThirtyDayMonths)
            }
            other => Err(format!(
                "unknown date stepping '{}' (expected calendar or thirty-day)",
                other
            )),
        }
    }
}
