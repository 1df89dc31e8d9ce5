//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use lift_building::{Building, StepOutcome};
use lift_core::{SimClock, SimConfig, Tick};
use lift_sim::{EpisodeSummary, SimObserver};

use crate::row::{ElevatorSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one summary row per step and one row per
/// elevator at each snapshot tick.
///
/// Observer hooks cannot fail, so the first write error is kept and the
/// rest are dropped.  Check [`take_error`][Self::take_error] once
/// `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Wrap `writer`, taking the wall-clock mapping from `config`.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self { writer, clock: config.make_clock(), last_error: None }
    }

    /// The first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn keep_first(&mut self, result: OutputResult<()>) {
        match result {
            Err(e) if self.last_error.is_none() => {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
            _ => {}
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, outcome: &StepOutcome) {
        let row = StepSummaryRow::from_outcome(tick.0, self.clock.unix_secs_at(tick), outcome);
        let result = self.writer.write_step_summary(&row);
        self.keep_first(result);
    }

    fn on_snapshot(&mut self, tick: Tick, building: &Building) {
        let rows: Vec<ElevatorSnapshotRow> = building
            .elevators()
            .iter()
            .enumerate()
            .map(|(i, e)| ElevatorSnapshotRow::from_elevator(i as u32, tick.0, e))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.keep_first(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _summary: &EpisodeSummary) {
        let result = self.writer.finish();
        self.keep_first(result);
    }
}
