//! The `DispatchPolicy` trait, the main extension point for user code.

use std::sync::Arc;

use lift_core::{ActionKind, ElevatorId, SimRng};

use crate::DispatchContext;

/// Pluggable elevator controller.
///
/// The building only executes actions; a policy decides them.  Before every
/// step the episode driver calls [`decide`](Self::decide), which by default
/// calls [`choose`](Self::choose) once per elevator in ascending index order.
///
/// # Thread safety
///
/// Independent episodes may share one policy across Rayon workers, so
/// implementations must be `Send + Sync`.  Randomness must come from the
/// `rng` argument, never from the policy itself, so that a seeded episode
/// replays exactly.
///
/// # Example
///
/// ```rust
/// use lift_core::{ActionKind, ElevatorId, SimRng};
/// use lift_dispatch::{DispatchContext, DispatchPolicy};
///
/// /// Unload whenever someone is bound for this floor, otherwise sit still.
/// struct UnloadOnly;
///
/// impl DispatchPolicy for UnloadOnly {
///     fn choose(&self, elevator: ElevatorId, ctx: &DispatchContext<'_>, _rng: &mut SimRng) -> ActionKind {
///         let car = &ctx.building.elevators()[elevator.index()];
///         if car.has_destination(car.floor()) { ActionKind::Unload } else { ActionKind::Wait }
///     }
/// }
/// ```
pub trait DispatchPolicy: Send + Sync + 'static {
    /// Pick the action for one elevator.
    fn choose(
        &self,
        elevator: ElevatorId,
        ctx:      &DispatchContext<'_>,
        rng:      &mut SimRng,
    ) -> ActionKind;

    /// One action per elevator, in elevator order.
    ///
    /// Override when elevators must be coordinated (e.g. so two cars never
    /// answer the same hall call).
    fn decide(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Vec<ActionKind> {
        (0..ctx.building.num_elevators() as u32)
            .map(|e| self.choose(ElevatorId(e), ctx, rng))
            .collect()
    }
}

/// Shared policies: one instance can drive several episodes at once.
impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Arc<P> {
    fn choose(&self, elevator: ElevatorId, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> ActionKind {
        (**self).choose(elevator, ctx, rng)
    }

    fn decide(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Vec<ActionKind> {
        (**self).decide(ctx, rng)
    }
}

/// Boxed policies, for choosing a controller at runtime.
impl<P: DispatchPolicy + ?Sized> DispatchPolicy for Box<P> {
    fn choose(&self, elevator: ElevatorId, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> ActionKind {
        (**self).choose(elevator, ctx, rng)
    }

    fn decide(&self, ctx: &DispatchContext<'_>, rng: &mut SimRng) -> Vec<ActionKind> {
        (**self).decide(ctx, rng)
    }
}
