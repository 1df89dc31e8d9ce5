//! Steps, the episode clock, and episode configuration.
//!
//! One [`Tick`] is one dispatch step.  Passenger age, wait, and patience are
//! all counted in ticks; wall-clock time only matters for output rows:
//!
//!   unix_secs(tick) = start_unix_secs + tick * tick_duration_secs
//!
//! The default resolution is 5 s per tick, roughly the time a mid-rise car
//! needs to travel one floor.

use std::fmt;

use crate::{LiftError, LiftResult};

/// Default seconds per tick.
pub const DEFAULT_TICK_SECS: u32 = 5;

/// Default passenger patience, in ticks.
pub const DEFAULT_MAX_WAIT_STEPS: u64 = 50;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Step counter of an episode.  Step 0 is the first step executed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following step.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// Steps from `earlier` up to `self`, zero if `earlier` is later.
    #[inline]
    pub fn steps_since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;

    fn add(self, steps: u64) -> Tick {
        Tick(self.0 + steps)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The episode's current step plus its mapping to Unix time.
#[derive(Clone, Debug)]
pub struct SimClock {
    pub start_unix_secs:    i64,
    pub tick_duration_secs: u32,
    pub current_tick:       Tick,
}

impl SimClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self { start_unix_secs, tick_duration_secs, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Back to step 0 for a new episode.
    #[inline]
    pub fn rewind(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Unix time at the start of `tick`.
    #[inline]
    pub fn unix_secs_at(&self, tick: Tick) -> i64 {
        self.start_unix_secs + self.secs_for(tick.0)
    }

    /// Simulated `(hours, minutes, seconds)` since step 0.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let secs = self.secs_for(self.current_tick.0).max(0) as u64;
        (secs / 3_600, ((secs / 60) % 60) as u32, (secs % 60) as u32)
    }

    /// Whole steps needed to cover `secs` seconds, rounding up.  Used to turn
    /// a patience given in seconds into `max_wait_steps`.
    pub fn steps_for_secs(&self, secs: u64) -> u64 {
        secs.div_ceil(u64::from(self.tick_duration_secs.max(1)))
    }

    fn secs_for(&self, ticks: u64) -> i64 {
        ticks as i64 * i64::from(self.tick_duration_secs)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{}, {h:02}:{m:02}:{s:02} elapsed", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Episode configuration: length, resolution, seed, and passenger patience.
///
/// The demo binary reads it from JSON (with the `serde` feature).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Unix timestamp of step 0.
    pub start_unix_secs: i64,

    /// Seconds per step.  Must be non-zero.
    pub tick_duration_secs: u32,

    /// Steps in one episode.
    pub total_ticks: u64,

    /// Master seed; arrival and policy streams are derived from it.
    pub seed: u64,

    /// Steps a newly arrived passenger waits in a queue before leaving.
    pub max_wait_steps: u64,

    /// Worker threads for parallel episode sweeps.  `None` uses Rayon's
    /// global pool.
    pub num_threads: Option<usize>,

    /// Emit an elevator snapshot every N steps.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl SimConfig {
    /// Default resolution and patience, a snapshot every step.
    pub fn with_ticks(total_ticks: u64, seed: u64) -> Self {
        Self {
            start_unix_secs:       0,
            tick_duration_secs:    DEFAULT_TICK_SECS,
            total_ticks,
            seed,
            max_wait_steps:        DEFAULT_MAX_WAIT_STEPS,
            num_threads:           None,
            output_interval_ticks: 1,
        }
    }

    /// First step past the end of the episode.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    /// Whether a snapshot is due after `tick`.
    #[inline]
    pub fn snapshot_due(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0.is_multiple_of(self.output_interval_ticks)
    }

    pub fn validate(&self) -> LiftResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(LiftError::Config("tick_duration_secs must be non-zero".into()));
        }
        if self.num_threads == Some(0) {
            return Err(LiftError::Config("num_threads must be at least 1 when set".into()));
        }
        Ok(())
    }
}
