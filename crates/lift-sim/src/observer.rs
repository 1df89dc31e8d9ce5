//! Episode observer trait for progress reporting and data collection.

use lift_building::{Building, StepOutcome};
use lift_core::Tick;

use crate::EpisodeSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: delivery counter
///
/// ```rust
/// use lift_building::StepOutcome;
/// use lift_core::Tick;
/// use lift_sim::SimObserver;
///
/// struct Delivered(usize);
///
/// impl SimObserver for Delivered {
///     fn on_step_end(&mut self, _tick: Tick, outcome: &StepOutcome) {
///         self.0 += outcome.deboarded;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before arrivals are drawn.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the building has executed the step.
    fn on_step_end(&mut self, _tick: Tick, _outcome: &StepOutcome) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to the whole building.
    fn on_snapshot(&mut self, _tick: Tick, _building: &Building) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _summary: &EpisodeSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
