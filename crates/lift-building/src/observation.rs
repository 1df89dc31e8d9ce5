//! The "limited" observation view: what a real controller could see.

use lift_core::Floor;

/// Snapshot of elevator positions and lit buttons after a step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Current floor of each elevator, by elevator index.
    pub elevator_floors:     Vec<Floor>,
    /// `destination_buttons[e][f]`: some occupant of elevator `e` is bound
    /// for floor `f`.  Elevators × floors.
    pub destination_buttons: Vec<Vec<bool>>,
    /// `hall_buttons[f] = [up, down]`: the floor's queue for that direction
    /// is non-empty.  Floors × 2.
    pub hall_buttons:        Vec<[bool; 2]>,
}

impl Observation {
    /// Length of [`flatten`](Self::flatten) for a building of this shape.
    pub fn flat_len(num_floors: usize, num_elevators: usize) -> usize {
        num_elevators + num_elevators * num_floors + 2 * num_floors
    }

    /// Flatten into one numeric vector: elevator floors, then destination
    /// buttons row-major, then hall buttons (`up, down` per floor).  Booleans
    /// become 0.0 / 1.0.
    pub fn flatten(&self) -> Vec<f32> {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        let mut out = Vec::with_capacity(Self::flat_len(
            self.hall_buttons.len(),
            self.elevator_floors.len(),
        ));
        out.extend(self.elevator_floors.iter().map(|&f| f as f32));
        out.extend(self.destination_buttons.iter().flatten().map(|&b| flag(b)));
        out.extend(self.hall_buttons.iter().flatten().map(|&b| flag(b)));
        out
    }
}
