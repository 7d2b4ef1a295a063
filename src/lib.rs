//! # Savings Projection
//!
//! Compound-interest projection towards a savings target: starting from an
//! initial balance, add interest and a fixed contribution each period until
//! the balance meets the target or a 100-year horizon runs out.
//!
//! - [`rates`]: periodicities and annual/per-period rate conversion
//! - [`projection`]: the engine and its result types
//! - [`scenario`]: inputs, CSV loading and what-if sweeps
//! - [`report`]: summaries, text tables, CSV export and chart series
//!
//! ## Example
//!
//! ```
//! use savings_projection::{PeriodicityUnit, ProjectionEngine, ProjectionInput, RateSpec};
//!
//! let rate = RateSpec::annual(10.0);
//! let input = ProjectionInput::new(1100.0, 1000.0, 0.0, rate, PeriodicityUnit::Annual);
//! let result = ProjectionEngine::default().project(&input).unwrap();
//! assert_eq!(result.len(), 1);
//! assert!(result.target_reached());
//! ```

pub mod error;
pub mod projection;
pub mod rates;
pub mod report;
pub mod scenario;

pub use error::{ProjectionError, Result};
pub use projection::{
    DateStepping, Outcome, PeriodRecord, ProjectionConfig, ProjectionEngine, ProjectionResult,
    TerminationReason,
};
pub use rates::{PeriodicityUnit, RateBasis, RateBasisTag, RateSpec};
pub use scenario::{ProjectionInput, ProjectionRequest};
