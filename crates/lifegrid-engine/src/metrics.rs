//! Per-step metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and population data for a single
//! generation, for logging and the driver's run summary.

use lifegrid_core::Generation;

/// Timing and population metrics collected during a single step.
///
/// The engine populates these after each `step()` call; consumers read
/// them from the most recent step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation produced by this step.
    pub generation: Generation,
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Live cells after the step.
    pub live_cells: usize,
    /// Cells that were dead and became alive.
    pub births: usize,
    /// Cells that were alive and died.
    pub deaths: usize,
}

impl StepMetrics {
    /// Whether the step changed any cell.
    pub fn is_unchanged(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}
