//! CSV export of period rows

use crate::error::Result;
use crate::projection::ProjectionResult;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ExportRow {
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Opening Balance")]
    opening_balance: String,
    #[serde(rename = "Rate")]
    rate: String,
    #[serde(rename = "Interest")]
    interest: String,
    #[serde(rename = "Contribution")]
    contribution: String,
    #[serde(rename = "Closing Balance")]
    closing_balance: String,
}

/// Write one CSV row per period, money at two decimals and the rate as `x.xx%`.
/// An empty result still gets a header row.
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record([
        "Period",
        "Date",
        "Opening Balance",
        "Rate",
        "Interest",
        "Contribution",
        "Closing Balance",
    ])?;

    for r in result.records() {
        csv_writer.serialize(ExportRow {
            period: r.period,
            date: r.date.to_string(),
            opening_balance: format!("{:.2}", r.opening_balance),
            rate: format!("{:.2}%", r.periodic_rate_pct),
            interest: format!("{:.2}", r.interest),
            contribution: format!("{:.2}", r.contribution),
            closing_balance: format!("{:.2}", r.closing_balance),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;
    use crate::rates::{PeriodicityUnit, RateSpec};
    use crate::scenario::ProjectionInput;
    use chrono::NaiveDate;

    fn export(target: f64) -> String {
        let rate = RateSpec::annual(0.0);
        let input = ProjectionInput::new(target, 0.0, 100.0, rate, PeriodicityUnit::Monthly)
            .with_start_date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        let result = ProjectionEngine::default().project(&input).unwrap();
        let mut out = Vec::new();
        write_csv(&result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows() {
        let csv = export(200.0);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Period,Date,Opening Balance,Rate,Interest,Contribution,Closing Balance",
                "1,2025-01-01,0.00,0.00%,0.00,100.00,100.00",
                "2,2025-02-01,100.00,0.00%,0.00,100.00,200.00",
            ]
        );
    }

    #[test]
    fn test_empty_result_writes_header() {
        assert_eq!(export(0.0).lines().count(), 1);
    }
}
