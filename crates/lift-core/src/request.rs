//! The arrival record handed from the arrival generator to the building.

use crate::{Floor, Tick};

/// A passenger who showed up at a hall call station this step.
///
/// This is plain data: the building validates it (start and destination must
/// differ and lie inside the building) and assigns the passenger an identity
/// on admission.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewPassenger {
    pub start_floor:       Floor,
    pub destination_floor: Floor,
    /// Step at which the passenger arrived.
    pub start_step:        Tick,
    /// Steps the passenger is willing to wait in a queue before leaving.
    pub max_wait_steps:    u64,
}

impl NewPassenger {
    pub fn new(start_floor: Floor, destination_floor: Floor, start_step: Tick, max_wait_steps: u64) -> Self {
        Self { start_floor, destination_floor, start_step, max_wait_steps }
    }
}
