//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `elevator_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, StepSummaryRow};

const SNAPSHOT_HEADER: [&str; 6] =
    ["elevator_id", "tick", "floor", "occupancy", "capacity", "destination_count"];

const SUMMARY_HEADER: [&str; 9] = [
    "tick",
    "unix_time_secs",
    "deboarded",
    "rejected",
    "expired",
    "correct_moves",
    "incorrect_moves",
    "queued",
    "in_transit",
];

/// Writes simulation output to two CSV files.
///
/// Headers are written up front, so a run that never reaches a snapshot
/// still leaves well-formed (empty) tables behind.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create both files in `dir`, truncating any previous run.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            snapshots: open(&dir.join("elevator_snapshots.csv"), &SNAPSHOT_HEADER)?,
            summaries: open(&dir.join("step_summaries.csv"), &SUMMARY_HEADER)?,
            finished:  false,
        })
    }
}

fn open(path: &Path, header: &[&str]) -> OutputResult<Writer<File>> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(header)?;
    Ok(writer)
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.serialize(row)?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.snapshots.flush()?;
            self.summaries.flush()?;
        }
        Ok(())
    }
}
