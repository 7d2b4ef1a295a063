//! Chart-ready series: balance trajectory plus a target reference line

use crate::projection::ProjectionResult;
use chrono::NaiveDate;
use serde::Serialize;

/// One plotted period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub period: u32,
    pub date: NaiveDate,
    pub closing_balance: f64,
    pub interest: f64,
    pub contribution: f64,
}

/// Horizontal line at the target, spanning the plotted periods
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetLine {
    pub from_period: u32,
    pub to_period: u32,
    pub value: f64,
}

/// Data a charting front-end needs; styling is left to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    /// Absent when there is nothing to plot
    pub target_line: Option<TargetLine>,
}

impl ChartSeries {
    pub fn from_result(result: &ProjectionResult) -> Self {
        let points: Vec<ChartPoint> = result
            .records()
            .iter()
            .map(|r| ChartPoint {
                period: r.period,
                date: r.date,
                closing_balance: r.closing_balance,
                interest: r.interest,
                contribution: r.contribution,
            })
            .collect();

        let target_line = match (points.first(), points.last()) {
            (Some(first), Some(last)) => Some(TargetLine {
                from_period: first.period,
                to_period: last.period,
                value: result.target(),
            }),
            _ => None,
        };

        Self { points, target_line }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
