//! SQLite output backend (feature `sqlite`).
//!
//! Creates `output.db` in the output directory with two tables,
//! `elevator_snapshots` and `step_summaries`.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, StepSummaryRow};

const SCHEMA: &str = "
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous  = NORMAL;
    CREATE TABLE IF NOT EXISTS elevator_snapshots (
        elevator_id       INTEGER NOT NULL,
        tick              INTEGER NOT NULL,
        floor             INTEGER NOT NULL,
        occupancy         INTEGER NOT NULL,
        capacity          INTEGER NOT NULL,
        destination_count INTEGER NOT NULL,
        PRIMARY KEY (tick, elevator_id)
    );
    CREATE TABLE IF NOT EXISTS step_summaries (
        tick            INTEGER PRIMARY KEY,
        unix_time_secs  INTEGER NOT NULL,
        deboarded       INTEGER NOT NULL,
        rejected        INTEGER NOT NULL,
        expired         INTEGER NOT NULL,
        correct_moves   INTEGER NOT NULL,
        incorrect_moves INTEGER NOT NULL,
        queued          INTEGER NOT NULL,
        in_transit      INTEGER NOT NULL
    );";

/// Writes simulation output to an SQLite database.
///
/// Rows are inserted with `INSERT OR REPLACE`, so re-running an episode into
/// the same directory overwrites its ticks instead of failing.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO elevator_snapshots \
                 (elevator_id, tick, floor, occupancy, capacity, destination_count) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.elevator_id,
                    row.tick,
                    row.floor,
                    row.occupancy,
                    row.capacity,
                    row.destination_count,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT OR REPLACE INTO step_summaries \
             (tick, unix_time_secs, deboarded, rejected, expired, \
              correct_moves, incorrect_moves, queued, in_transit) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        stmt.execute(params![
            row.tick,
            row.unix_time_secs,
            row.deboarded,
            row.rejected,
            row.expired,
            row.correct_moves,
            row.incorrect_moves,
            row.queued,
            row.in_transit,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
