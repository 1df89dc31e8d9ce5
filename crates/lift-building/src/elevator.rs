//! A single elevator car: position, bounds, capacity, and occupants.
//!
//! The elevator has no phase enum.  Its behavior is purely a function of its
//! floor, its occupants, and the one primitive the building applies to it
//! this step (move, load, or unload).

use rustc_hash::FxHashSet;

use lift_core::Floor;

use crate::{BuildingError, BuildingResult, Passenger};

/// An elevator car.
///
/// Invariants, held after every public call:
///
/// - `min_floor <= floor <= max_floor`
/// - `passengers.len() <= capacity`
/// - `destinations` is exactly the set of occupant destination floors
#[derive(Clone, Debug)]
pub struct Elevator {
    floor:        Floor,
    /// Floor the car returns to on [`reset`](Self::reset).
    start_floor:  Floor,
    min_floor:    Floor,
    max_floor:    Floor,
    capacity:     usize,
    passengers:   Vec<Passenger>,
    destinations: FxHashSet<Floor>,
}

impl Elevator {
    /// Create an empty car.  `start_floor` is clamped into
    /// `[min_floor, max_floor]`; callers validate `min_floor <= max_floor`.
    pub fn new(start_floor: Floor, capacity: usize, min_floor: Floor, max_floor: Floor) -> Self {
        let start_floor = start_floor.clamp(min_floor, max_floor);
        Self {
            floor: start_floor,
            start_floor,
            min_floor,
            max_floor,
            capacity,
            passengers: Vec::with_capacity(capacity),
            destinations: FxHashSet::default(),
        }
    }

    // ── Primitives ────────────────────────────────────────────────────────

    /// Move by `delta` floors, clamped to the car's bounds.  Moving past a
    /// bound leaves the car where it is.
    pub fn move_by(&mut self, delta: i32) {
        let target = i64::from(self.floor) + i64::from(delta);
        let clamped = target.clamp(i64::from(self.min_floor), i64::from(self.max_floor));
        // In range of `Floor`: both bounds are `Floor` values.
        self.floor = clamped as Floor;
    }

    /// Board `candidates` in order and return the newly boarded slice.
    ///
    /// Fails without boarding anyone if there are more candidates than free
    /// places; the building always pre-limits the batch to
    /// [`available_capacity`](Self::available_capacity).
    pub fn load(&mut self, candidates: Vec<Passenger>) -> BuildingResult<&[Passenger]> {
        let available = self.available_capacity();
        if candidates.len() > available {
            return Err(BuildingError::OverCapacity {
                requested: candidates.len(),
                available,
                capacity: self.capacity,
            });
        }
        let first_new = self.passengers.len();
        self.passengers.extend(candidates);
        self.refresh_destinations();
        Ok(&self.passengers[first_new..])
    }

    /// Remove every occupant whose destination is the current floor.
    ///
    /// Both the departed and the remaining occupants keep their relative
    /// order.  Any number of passengers may leave at once.
    pub fn unload(&mut self) -> Vec<Passenger> {
        let floor = self.floor;
        let (departed, staying): (Vec<Passenger>, Vec<Passenger>) =
            std::mem::take(&mut self.passengers)
                .into_iter()
                .partition(|p| p.arrived(floor));
        self.passengers = staying;
        self.refresh_destinations();
        departed
    }

    /// Count occupants for whom the move from `before_floor` to the current
    /// floor was progress, and those for whom it was not.
    pub fn direction_move_counts(&self, before_floor: Floor) -> (usize, usize) {
        let correct = self
            .passengers
            .iter()
            .filter(|p| p.moved_toward_goal(before_floor, self.floor))
            .count();
        (correct, self.passengers.len() - correct)
    }

    /// Empty the car and return it to its start floor (new episode).
    pub fn reset(&mut self) {
        self.floor = self.start_floor;
        self.passengers.clear();
        self.destinations.clear();
    }

    pub(crate) fn age_occupants(&mut self) {
        for passenger in &mut self.passengers {
            passenger.advance(true);
        }
    }

    fn refresh_destinations(&mut self) {
        self.destinations.clear();
        self.destinations
            .extend(self.passengers.iter().map(Passenger::destination_floor));
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn start_floor(&self) -> Floor {
        self.start_floor
    }

    pub fn min_floor(&self) -> Floor {
        self.min_floor
    }

    pub fn max_floor(&self) -> Floor {
        self.max_floor
    }

    pub fn bounds(&self) -> (Floor, Floor) {
        (self.min_floor, self.max_floor)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn available_capacity(&self) -> usize {
        self.capacity - self.passengers.len()
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    /// Occupants in boarding order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Distinct destination floors of current occupants.
    pub fn destinations(&self) -> &FxHashSet<Floor> {
        &self.destinations
    }

    /// `true` if at least one occupant is bound for `floor`.
    #[inline]
    pub fn has_destination(&self, floor: Floor) -> bool {
        self.destinations.contains(&floor)
    }

    /// Destination "buttons" for floors `0..num_floors`.
    pub fn destination_flags(&self, num_floors: u32) -> Vec<bool> {
        (0..num_floors).map(|f| self.has_destination(f)).collect()
    }
}
