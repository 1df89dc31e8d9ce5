//! The `Sim` struct and its step loop.

use tracing::{debug, info};

use lift_arrivals::PassengerArrivals;
use lift_building::{Building, BuildingError, StepOutcome};
use lift_core::{ActionKind, SimClock, SimConfig, SimRng, Tick};
use lift_dispatch::{DispatchContext, DispatchPolicy};

use crate::{EpisodeSummary, SimObserver, SimResult};

/// Child-stream offsets.  Arrivals and the policy draw from separate streams
/// so that swapping policies leaves the passenger sequence unchanged.
const ARRIVAL_STREAM: u64 = 0;
const POLICY_STREAM:  u64 = 1;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The episode runner.
///
/// `Sim<P>` couples an arrival process, a dispatch policy and a building,
/// and drives the step loop:
///
/// 1. **Decide**: the policy reads the building and its observation and
///    returns one action per elevator.
/// 2. **Arrive**: the arrival table draws this step's new passengers.
/// 3. **Execute**: `Building::execute_step` applies both.
/// 4. **Record**: the step's outcome is folded into the episode summary and
///    the clock advances.
///
/// [`step`](Self::step) runs 2–4 with caller-chosen actions, for external
/// controllers such as learning agents.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DispatchPolicy> {
    /// Episode configuration (total ticks, seed, patience, …).
    pub config: SimConfig,

    /// Simulation clock; tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// Building state.  Read freely; mutate only through the `Sim`.
    pub building: Building,

    /// Arrival process, drawn once per step.
    pub arrivals: PassengerArrivals,

    /// The dispatch policy used by [`run`](Self::run) and
    /// [`policy_step`](Self::policy_step).
    pub policy: P,

    arrival_rng: SimRng,
    policy_rng:  SimRng,
    summary:     EpisodeSummary,
}

impl<P: DispatchPolicy> Sim<P> {
    /// Assemble a sim from validated parts.  Used by `SimBuilder`.
    pub(crate) fn new(
        config:   SimConfig,
        building: Building,
        arrivals: PassengerArrivals,
        policy:   P,
    ) -> Self {
        let (arrival_rng, policy_rng) = streams(config.seed);
        Self {
            clock: config.make_clock(),
            summary: EpisodeSummary::new(config.seed),
            config,
            building,
            arrivals,
            policy,
            arrival_rng,
            policy_rng,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()` under the policy.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<EpisodeSummary> {
        info!(
            seed = self.config.seed,
            total_ticks = self.config.total_ticks,
            floors = self.building.num_floors(),
            elevators = self.building.num_elevators(),
            "episode start"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick, &self.summary);
        info!(
            steps = self.summary.steps,
            arrivals = self.summary.arrivals,
            delivered = self.summary.totals.deboarded,
            rejected = self.summary.totals.rejected,
            expired = self.summary.totals.expired,
            "episode end"
        );
        Ok(self.summary)
    }

    /// Run exactly `n` policy-driven steps from the current position
    /// (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// One step with actions chosen by the policy.
    pub fn policy_step(&mut self) -> SimResult<StepOutcome> {
        let actions = self.decide();
        self.step(&actions)
    }

    /// One step with caller-supplied actions, one per elevator.
    ///
    /// A wrong action count fails before any arrival is drawn, so the
    /// episode is left exactly as it was.
    pub fn step(&mut self, actions: &[ActionKind]) -> SimResult<StepOutcome> {
        let expected = self.building.num_elevators();
        if actions.len() != expected {
            return Err(BuildingError::ActionCountMismatch { expected, got: actions.len() }.into());
        }

        let now = self.clock.current_tick;
        let new = self.arrivals.generate(now, self.config.max_wait_steps, &mut self.arrival_rng);
        self.building.execute_step(&new, actions)?;

        let outcome = self.building.outcome();
        self.summary.record(new.len(), &outcome);
        self.clock.advance();
        debug!(tick = now.0, arrivals = new.len(), ?outcome, "step");
        Ok(outcome)
    }

    /// Start a new episode: empty building, tick 0, random streams reseeded
    /// from `config.seed`, totals cleared.
    pub fn reset(&mut self) {
        self.building.reset();
        self.clock.rewind();
        (self.arrival_rng, self.policy_rng) = streams(self.config.seed);
        self.summary = EpisodeSummary::new(self.config.seed);
    }

    /// Like [`reset`](Self::reset) but with a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.reset();
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Totals so far this episode.
    pub fn summary(&self) -> &EpisodeSummary {
        &self.summary
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn decide(&mut self) -> Vec<ActionKind> {
        let observation = self.building.observe();
        let ctx = DispatchContext::new(self.clock.current_tick, &self.building, &observation);
        self.policy.decide(&ctx, &mut self.policy_rng)
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let outcome = self.policy_step()?;
        observer.on_step_end(now, &outcome);
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.building);
        }
        Ok(())
    }
}

/// Derive the arrival and policy streams from one master seed.
fn streams(seed: u64) -> (SimRng, SimRng) {
    let mut root = SimRng::new(seed);
    (root.child(ARRIVAL_STREAM), root.child(POLICY_STREAM))
}
