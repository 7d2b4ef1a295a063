//! Error types for the projection engine and its loaders

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised before a projection runs, or while reading/writing scenario data.
///
/// An unreachable target is not an error: it is reported as
/// [`TerminationReason::PeriodCapExceeded`](crate::projection::TerminationReason).
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// A monetary amount or rate was negative, NaN or infinite
    #[error("invalid input: {field} must be a finite, non-negative number (got {value})")]
    InvalidAmount { field: &'static str, value: f64 },

    /// Rate conversion asked for zero periods per year
    #[error("invalid input: periods per year must be positive (got {0})")]
    InvalidPeriodCount(u32),

    /// Horizon shorter than one year
    #[error("invalid input: projection horizon must be at least 1 year (got {0})")]
    InvalidHorizon(u32),

    /// The calendar cannot represent the dates the horizon would reach
    #[error("start date {0} cannot be advanced across the projection horizon")]
    DateOutOfRange(NaiveDate),

    #[error("unknown periodicity '{0}' (expected monthly, quarterly, semiannual or annual)")]
    UnknownPeriodicity(String),

    #[error("unknown rate basis '{0}' (expected annual or per_period)")]
    UnknownRateBasis(String),

    /// Malformed scenario row in a CSV input
    #[error("invalid scenario at row {row}: {message}")]
    InvalidScenario { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reject negative, NaN and infinite values for a named field
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ProjectionError::InvalidAmount { field, value })
    }
}
