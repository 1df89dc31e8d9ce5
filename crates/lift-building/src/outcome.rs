//! Raw per-step outcome counters.
//!
//! These are the reward components handed to an external scoring function.
//! Weighting them into a scalar is the caller's business.

/// Outcome counters for one step (or, after [`accumulate`](Self::accumulate),
/// for a whole episode).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutcome {
    /// Passengers delivered to their destination this step.
    pub deboarded:       usize,
    /// Arrivals turned away because their queue was full.
    pub rejected:        usize,
    /// Queued passengers who gave up waiting.
    pub expired:         usize,
    /// Occupant-moves that brought a passenger closer to their floor.
    pub correct_moves:   usize,
    /// Occupant-moves that did not.
    pub incorrect_moves: usize,
    /// Passengers waiting in hall queues at the end of the step.
    pub queued:          usize,
    /// Passengers inside elevators at the end of the step.
    pub in_transit:      usize,
}

impl StepOutcome {
    /// Component names, in the order returned by [`components`](Self::components).
    pub const KEYS: [&'static str; 7] = [
        "deboarded",
        "rejected",
        "expired",
        "correct_moves",
        "incorrect_moves",
        "queued",
        "in_transit",
    ];

    /// Fixed-key view of the record.
    pub fn components(&self) -> [(&'static str, usize); 7] {
        let [deboarded, rejected, expired, correct, incorrect, queued, in_transit] = Self::KEYS;
        [
            (deboarded,  self.deboarded),
            (rejected,   self.rejected),
            (expired,    self.expired),
            (correct,    self.correct_moves),
            (incorrect,  self.incorrect_moves),
            (queued,     self.queued),
            (in_transit, self.in_transit),
        ]
    }

    /// Add `other` into `self`.
    ///
    /// `queued` and `in_transit` are levels, not events; summed over an
    /// episode they become passenger-steps spent waiting and riding.
    pub fn accumulate(&mut self, other: &StepOutcome) {
        self.deboarded       += other.deboarded;
        self.rejected        += other.rejected;
        self.expired         += other.expired;
        self.correct_moves   += other.correct_moves;
        self.incorrect_moves += other.incorrect_moves;
        self.queued          += other.queued;
        self.in_transit      += other.in_transit;
    }
}
