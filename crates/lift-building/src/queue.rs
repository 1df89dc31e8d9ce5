//! Per-floor, per-direction hall queues.
//!
//! Each floor has one up-queue and one down-queue, both FIFO and both bounded
//! by `max_queue`.  The bound is enforced at admission time by rejecting the
//! newcomer, so a queue never grows past it.

use std::collections::VecDeque;

use lift_core::{Direction, Floor};

use crate::Passenger;

/// All hall queues of a building.
#[derive(Clone, Debug)]
pub struct FloorQueues {
    up:        Vec<VecDeque<Passenger>>,
    down:      Vec<VecDeque<Passenger>>,
    max_queue: usize,
}

impl FloorQueues {
    pub fn new(num_floors: u32, max_queue: usize) -> Self {
        Self {
            up:   vec![VecDeque::new(); num_floors as usize],
            down: vec![VecDeque::new(); num_floors as usize],
            max_queue,
        }
    }

    pub fn max_queue(&self) -> usize {
        self.max_queue
    }

    pub fn num_floors(&self) -> u32 {
        self.up.len() as u32
    }

    /// Read-only view of one queue, front first.  `None` for floors outside
    /// the building.
    pub fn get(&self, floor: Floor, direction: Direction) -> Option<&VecDeque<Passenger>> {
        self.side(direction).get(floor as usize)
    }

    /// Number of passengers waiting at `floor` to travel in `direction`.
    pub fn len(&self, floor: Floor, direction: Direction) -> usize {
        self.get(floor, direction).map_or(0, VecDeque::len)
    }

    /// `true` if the hall button for `direction` is lit at `floor`.
    pub fn is_waiting(&self, floor: Floor, direction: Direction) -> bool {
        self.len(floor, direction) > 0
    }

    /// Passengers waiting anywhere in the building.
    pub fn total_len(&self) -> usize {
        self.up.iter().chain(&self.down).map(VecDeque::len).sum()
    }

    /// Append `passenger` to the tail of its queue, or hand it back if the
    /// queue is already full.
    ///
    /// The caller guarantees `passenger.start_floor()` is inside the building.
    pub fn try_admit(&mut self, passenger: Passenger) -> Result<(), Passenger> {
        let max_queue = self.max_queue;
        let queue = &mut self.side_mut(passenger.direction())[passenger.start_floor() as usize];
        if queue.len() < max_queue {
            queue.push_back(passenger);
            Ok(())
        } else {
            Err(passenger)
        }
    }

    /// Remove up to `n` passengers from the front of a queue, earliest first.
    /// Everyone left behind keeps their place.
    pub fn take_front(&mut self, floor: Floor, direction: Direction, n: usize) -> Vec<Passenger> {
        match self.side_mut(direction).get_mut(floor as usize) {
            Some(queue) => {
                let n = n.min(queue.len());
                queue.drain(..n).collect()
            }
            None => Vec::new(),
        }
    }

    /// Remove every expired passenger.  Returned in floor order, up-queue
    /// before down-queue, preserving queue order within each.
    pub fn remove_expired(&mut self) -> Vec<Passenger> {
        let mut expired = Vec::new();
        for floor in 0..self.up.len() {
            for queue in [&mut self.up[floor], &mut self.down[floor]] {
                if queue.iter().any(Passenger::has_expired) {
                    let (gone, kept): (VecDeque<Passenger>, VecDeque<Passenger>) =
                        queue.drain(..).partition(Passenger::has_expired);
                    *queue = kept;
                    expired.extend(gone);
                }
            }
        }
        expired
    }

    /// Age every waiting passenger by one step.
    pub fn age_all(&mut self) {
        for queue in self.up.iter_mut().chain(self.down.iter_mut()) {
            for passenger in queue.iter_mut() {
                passenger.advance(false);
            }
        }
    }

    pub fn clear(&mut self) {
        for queue in self.up.iter_mut().chain(self.down.iter_mut()) {
            queue.clear();
        }
    }

    fn side(&self, direction: Direction) -> &Vec<VecDeque<Passenger>> {
        match direction {
            Direction::Up   => &self.up,
            Direction::Down => &self.down,
        }
    }

    fn side_mut(&mut self, direction: Direction) -> &mut Vec<VecDeque<Passenger>> {
        match direction {
            Direction::Up   => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}
