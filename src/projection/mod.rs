//! Projection engine for savings-target scenarios

mod calendar;
mod engine;
mod result;

pub use calendar::DateStepping;
pub use engine::{ProjectionConfig, ProjectionEngine};
pub use result::{Outcome, PeriodRecord, ProjectionResult, TerminationReason};

// ============================================================================
// Horizon
// ============================================================================
// The horizon bounds the accumulation loop. With zero rate and zero
// contribution the balance never moves, so without it an unmet target
// would loop forever.

/// Default safety horizon (100 years, i.e. 1200 monthly periods)
pub const DEFAULT_HORIZON_YEARS: u32 = 100;

/// Largest horizon a config may request
pub const MAX_HORIZON_YEARS: u32 = 1000;
