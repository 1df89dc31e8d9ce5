//! Running totals for one episode.

use lift_building::StepOutcome;

/// Everything an episode produced, folded step by step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EpisodeSummary {
    /// Seed the episode's random streams were derived from.
    pub seed:     u64,
    /// Steps executed.
    pub steps:    u64,
    /// Passengers generated by the arrival process (admitted or rejected).
    pub arrivals: usize,
    /// Sum of every step's outcome.  `queued` and `in_transit` become
    /// passenger-steps spent waiting and riding.
    pub totals:   StepOutcome,
}

impl EpisodeSummary {
    pub fn new(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    pub fn record(&mut self, arrivals: usize, outcome: &StepOutcome) {
        self.steps += 1;
        self.arrivals += arrivals;
        self.totals.accumulate(outcome);
    }

    /// Delivered passengers as a fraction of arrivals; 0 with no arrivals.
    pub fn delivery_rate(&self) -> f64 {
        if self.arrivals == 0 {
            0.0
        } else {
            self.totals.deboarded as f64 / self.arrivals as f64
        }
    }

    /// Mean number of passengers waiting in hall queues per step.
    pub fn mean_queued(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.totals.queued as f64 / self.steps as f64
        }
    }
}
