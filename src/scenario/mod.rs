//! Scenario inputs, file loading and what-if sweeps

mod input;
pub mod loader;
pub mod sweep;

pub use input::{ProjectionInput, ProjectionRequest};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario};
pub use sweep::{SweepCell, SweepGrid};
