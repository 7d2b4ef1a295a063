//! Fixed-width text table of period rows

use crate::projection::ProjectionResult;
use std::fmt::Write;

/// Formatting options for [`render_table`]
#[derive(Debug, Clone)]
pub struct TableStyle {
    /// Prefix for monetary values
    pub currency_symbol: String,
    /// Mark the row where the target is first met
    pub highlight_target_row: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            highlight_target_row: true,
        }
    }
}

impl TableStyle {
    fn money(&self, value: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, value)
    }
}

const HEADERS: [&str; 7] =
    ["Period", "Date", "Opening", "Rate", "Interest", "Contribution", "Closing"];

/// Render every record as a right-aligned text table
pub fn render_table(result: &ProjectionResult, style: &TableStyle) -> String {
    let rows: Vec<[String; 7]> = result
        .records()
        .iter()
        .map(|r| {
            [
                r.period.to_string(),
                r.date.to_string(),
                style.money(r.opening_balance),
                format!("{:.2}%", r.periodic_rate_pct),
                style.money(r.interest),
                style.money(r.contribution),
                style.money(r.closing_balance),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths, "");
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    let target_row = if style.highlight_target_row && result.target_reached() {
        rows.len().checked_sub(1)
    } else {
        None
    };
    for (idx, row) in rows.iter().enumerate() {
        let marker = if Some(idx) == target_row { "  <- target" } else { "" };
        write_row(&mut out, row, &widths, marker);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7], suffix: &str) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}{}", padded.join(" | "), suffix);
}
