//! Annual <-> per-period rate conversion
//!
//! Uses compound equivalence, not pro-rating: a 12% annual rate is
//! `(1.12)^(1/12) - 1` ≈ 0.9489% per month, not 1%.
//! All rates are expressed in percent (5.0 means 5%).

use crate::error::{ensure_non_negative, ProjectionError, Result};

/// Convert an annual effective rate to the equivalent rate for one of
/// `periods_per_year` periods
pub fn annual_to_periodic(annual_rate_pct: f64, periods_per_year: u32) -> Result<f64> {
    let annual = ensure_non_negative("annual rate", annual_rate_pct)?;
    match periods_per_year {
        0 => Err(ProjectionError::InvalidPeriodCount(periods_per_year)),
        1 => Ok(annual),
        n => Ok(((1.0 + annual / 100.0).powf(1.0 / n as f64) - 1.0) * 100.0),
    }
}

/// Convert a per-period rate to the annual effective rate it compounds to
pub fn periodic_to_annual(periodic_rate_pct: f64, periods_per_year: u32) -> Result<f64> {
    let periodic = ensure_non_negative("periodic rate", periodic_rate_pct)?;
    match periods_per_year {
        0 => Err(ProjectionError::InvalidPeriodCount(periods_per_year)),
        1 => Ok(periodic),
        n => Ok(((1.0 + periodic / 100.0).powi(n as i32) - 1.0) * 100.0),
    }
}
