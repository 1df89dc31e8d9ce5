//! Plain data row types written by output backends.
//!
//! Field order is column order in every backend.

use serde::Serialize;

use lift_building::{Elevator, StepOutcome};

/// One elevator's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElevatorSnapshotRow {
    pub elevator_id:       u32,
    pub tick:              u64,
    pub floor:             u32,
    pub occupancy:         u32,
    pub capacity:          u32,
    /// Number of distinct floors the riders are heading to.
    pub destination_count: u32,
}

impl ElevatorSnapshotRow {
    pub fn from_elevator(elevator_id: u32, tick: u64, elevator: &Elevator) -> Self {
        Self {
            elevator_id,
            tick,
            floor:             elevator.floor(),
            occupancy:         elevator.occupancy() as u32,
            capacity:          elevator.capacity() as u32,
            destination_count: elevator.destinations().len() as u32,
        }
    }
}

/// The outcome of one step, stamped with its tick and wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepSummaryRow {
    pub tick:            u64,
    pub unix_time_secs:  i64,
    pub deboarded:       u64,
    pub rejected:        u64,
    pub expired:         u64,
    pub correct_moves:   u64,
    pub incorrect_moves: u64,
    pub queued:          u64,
    pub in_transit:      u64,
}

impl StepSummaryRow {
    pub fn from_outcome(tick: u64, unix_time_secs: i64, outcome: &StepOutcome) -> Self {
        Self {
            tick,
            unix_time_secs,
            deboarded:       outcome.deboarded as u64,
            rejected:        outcome.rejected as u64,
            expired:         outcome.expired as u64,
            correct_moves:   outcome.correct_moves as u64,
            incorrect_moves: outcome.incorrect_moves as u64,
            queued:          outcome.queued as u64,
            in_transit:      outcome.in_transit as u64,
        }
    }
}
