//! Baseline policies: always wait, and uniformly random.

use lift_core::{ActionKind, ElevatorId, SimRng};

use crate::{DispatchContext, DispatchError, DispatchPolicy, DispatchResult};

/// A [`DispatchPolicy`] that never does anything.
///
/// Useful as a placeholder in tests and as the zero point when comparing
/// controllers: every passenger either expires or is rejected.
pub struct WaitPolicy;

impl DispatchPolicy for WaitPolicy {
    fn choose(&self, _elevator: ElevatorId, _ctx: &DispatchContext<'_>, _rng: &mut SimRng) -> ActionKind {
        ActionKind::Wait
    }
}

/// Picks uniformly among a fixed set of actions, independently per elevator.
pub struct RandomPolicy {
    actions: Vec<ActionKind>,
}

impl RandomPolicy {
    /// Uniform over all six actions.
    pub fn new() -> Self {
        Self { actions: ActionKind::ALL.to_vec() }
    }

    /// Uniform over `actions`, which must not be empty.
    pub fn with_actions(actions: Vec<ActionKind>) -> DispatchResult<Self> {
        if actions.is_empty() {
            return Err(DispatchError::Config("random policy needs at least one action".into()));
        }
        Ok(Self { actions })
    }

    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchPolicy for RandomPolicy {
    fn choose(&self, _elevator: ElevatorId, _ctx: &DispatchContext<'_>, rng: &mut SimRng) -> ActionKind {
        rng.choose(&self.actions).copied().unwrap_or_default()
    }
}
