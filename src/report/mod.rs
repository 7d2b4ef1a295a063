//! Presentation of projection results: summaries, tables, CSV and chart data

pub mod chart;
pub mod export;
pub mod table;

pub use chart::ChartSeries;
pub use export::write_csv;
pub use table::{render_table, TableStyle};

use crate::projection::{Outcome, ProjectionResult};

/// One-line, human-readable summary of how the projection ended
pub fn describe(result: &ProjectionResult) -> String {
    let unit = result.periodicity();
    match result.outcome() {
        Outcome::AlreadyMet => format!(
            "Target of {:.2} already met by the initial balance of {:.2}",
            result.target(),
            result.initial_balance()
        ),
        Outcome::Reached { periods, date } => format!(
            "Target of {:.2} reached after {} {} ({}) on {}, final balance {:.2}",
            result.target(),
            periods,
            if periods == 1 { unit.singular_label() } else { unit.label() },
            format_duration(periods * unit.months()),
            date,
            result.final_balance()
        ),
        Outcome::Unreachable { horizon_periods } => format!(
            "Target of {:.2} not reachable within {} {} ({}); balance reaches {:.2}",
            result.target(),
            horizon_periods,
            unit.label(),
            format_duration(horizon_periods * unit.months()),
            result.final_balance()
        ),
    }
}

/// "3 years 4 months", "1 year", "5 months"
pub fn format_duration(months: u32) -> String {
    let years = months / 12;
    let rem = months % 12;
    let plural = |n: u32, word: &str| {
        if n == 1 { format!("1 {}", word) } else { format!("{} {}s", n, word) }
    };
    match (years, rem) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;
    use crate::rates::{PeriodicityUnit, RateSpec};
    use crate::scenario::ProjectionInput;
    use chrono::NaiveDate;

    fn run(target: f64, initial: f64, contribution: f64) -> ProjectionResult {
        let rate = RateSpec::annual(0.0);
        let input =
            ProjectionInput::new(target, initial, contribution, rate, PeriodicityUnit::Monthly)
                .with_start_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        ProjectionEngine::default().project(&input).unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 months");
        assert_eq!(format_duration(1), "1 month");
        assert_eq!(format_duration(12), "1 year");
        assert_eq!(format_duration(40), "3 years 4 months");
        assert_eq!(format_duration(1200), "100 years");
    }

    #[test]
    fn test_three_presentations() {
        let met = describe(&run(100.0, 100.0, 0.0));
        assert!(met.contains("already met"));

        let reached = describe(&run(1400.0, 0.0, 100.0));
        assert!(reached.contains("reached after 14 months (1 year 2 months)"));
        assert!(reached.contains("2026-02-01"));

        let unreachable = describe(&run(100.0, 0.0, 0.0));
        assert!(unreachable.contains("not reachable within 1200 months (100 years)"));
    }
}
