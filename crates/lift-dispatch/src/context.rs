//! Read-only building state passed to every dispatch callback.

use lift_building::{Building, Observation};
use lift_core::Tick;

/// A read-only snapshot of the building handed to
/// [`DispatchPolicy`][crate::DispatchPolicy] before each step.
///
/// `observation` is the limited view a real controller would have;
/// `building` exposes everything, for oracle baselines and debugging.
/// Policies meant to transfer to a real installation should stick to the
/// observation.
pub struct DispatchContext<'a> {
    /// Step about to be executed.
    pub tick:        Tick,
    pub building:    &'a Building,
    pub observation: &'a Observation,
}

impl<'a> DispatchContext<'a> {
    #[inline]
    pub fn new(tick: Tick, building: &'a Building, observation: &'a Observation) -> Self {
        Self { tick, building, observation }
    }
}
