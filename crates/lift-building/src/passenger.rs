//! A single rider's journey.

use lift_core::{Direction, Floor, PassengerId, Tick};

use crate::{BuildingError, BuildingResult};

/// One passenger, from hall call to delivery (or abandonment).
///
/// `age_steps` counts every step since arrival; `wait_steps` only counts the
/// steps spent outside an elevator.  A queued passenger whose age exceeds
/// `max_wait_steps` leaves on the next expiry pass.  Once boarded, a
/// passenger can no longer expire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    id:                PassengerId,
    start_step:        Tick,
    start_floor:       Floor,
    destination_floor: Floor,
    max_wait_steps:    u64,
    age_steps:         u64,
    wait_steps:        u64,
}

impl Passenger {
    /// Create a fresh passenger with zero age and wait.
    ///
    /// Fails with [`BuildingError::SameFloor`] when the trip goes nowhere.
    pub fn new(
        id:                PassengerId,
        start_step:        Tick,
        start_floor:       Floor,
        destination_floor: Floor,
        max_wait_steps:    u64,
    ) -> BuildingResult<Self> {
        if start_floor == destination_floor {
            return Err(BuildingError::SameFloor { floor: start_floor });
        }
        Ok(Self {
            id,
            start_step,
            start_floor,
            destination_floor,
            max_wait_steps,
            age_steps: 0,
            wait_steps: 0,
        })
    }

    /// Age by one step.  Wait only grows while outside an elevator.
    #[inline]
    pub fn advance(&mut self, in_elevator: bool) {
        self.age_steps += 1;
        if !in_elevator {
            self.wait_steps += 1;
        }
    }

    #[inline]
    pub fn has_expired(&self) -> bool {
        self.age_steps > self.max_wait_steps
    }

    #[inline]
    pub fn arrived(&self, at_floor: Floor) -> bool {
        at_floor == self.destination_floor
    }

    /// `true` iff `after` is strictly closer to the destination than
    /// `before`.  Standing still never counts as progress.
    #[inline]
    pub fn moved_toward_goal(&self, before: Floor, after: Floor) -> bool {
        after.abs_diff(self.destination_floor) < before.abs_diff(self.destination_floor)
    }

    /// Which hall queue this passenger waits in.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::of_trip(self.start_floor, self.destination_floor)
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn start_step(&self) -> Tick {
        self.start_step
    }

    pub fn start_floor(&self) -> Floor {
        self.start_floor
    }

    pub fn destination_floor(&self) -> Floor {
        self.destination_floor
    }

    pub fn max_wait_steps(&self) -> u64 {
        self.max_wait_steps
    }

    pub fn age_steps(&self) -> u64 {
        self.age_steps
    }

    pub fn wait_steps(&self) -> u64 {
        self.wait_steps
    }
}
