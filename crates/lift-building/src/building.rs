//! The `Building` struct and its per-step dispatch protocol.

use std::collections::VecDeque;

use tracing::{debug, trace};

use lift_core::{ActionKind, Direction, ElevatorId, Floor, NewPassenger, PassengerId, Tick};

use crate::{
    BuildingBuilder, BuildingConfig, BuildingError, BuildingResult, Elevator, FloorQueues,
    Observation, Passenger, StepOutcome,
};

/// Owns every hall queue and every elevator, and runs one step at a time.
///
/// # Step protocol
///
/// [`execute_step`](Self::execute_step) performs, in order:
///
/// 1. **Validate** the action count and every arrival record.  Nothing is
///    mutated if this fails.
/// 2. **Clear** last step's outcome lists and move counters.
/// 3. **Expire** queued passengers whose age exceeds their patience.  This
///    happens before admission so a leaver never makes room for a newcomer
///    within the same step.
/// 4. **Admit** arrivals in input order; a full queue rejects the newcomer.
/// 5. **Act**, one action per elevator in ascending index order.  Elevators
///    sharing a floor contend for the same queue; the lower index drains
///    first.
/// 6. **Age** everyone: queued passengers age and wait, occupants only age.
///
/// Afterwards the caller reads the outcome through [`outcome`](Self::outcome),
/// the outcome lists, and [`observe`](Self::observe).
///
/// `Clone` produces a fully independent copy: queues, elevators, and
/// passengers are all owned values.
#[derive(Clone, Debug)]
pub struct Building {
    num_floors:      u32,
    queues:          FloorQueues,
    elevators:       Vec<Elevator>,
    step:            Tick,
    next_passenger:  u64,

    // ── Per-step outputs, cleared at the start of every step ──────────────
    deboarded:       Vec<Passenger>,
    rejected:        Vec<Passenger>,
    expired:         Vec<Passenger>,
    correct_moves:   usize,
    incorrect_moves: usize,
}

impl Building {
    /// Package-private constructor used by `BuildingBuilder`, which has
    /// already validated every input.
    pub(crate) fn new(num_floors: u32, max_queue: usize, elevators: Vec<Elevator>) -> Self {
        Self {
            num_floors,
            queues: FloorQueues::new(num_floors, max_queue),
            elevators,
            step: Tick::ZERO,
            next_passenger: 0,
            deboarded: Vec::new(),
            rejected: Vec::new(),
            expired: Vec::new(),
            correct_moves: 0,
            incorrect_moves: 0,
        }
    }

    /// Validate `config` and construct the building it describes.
    pub fn from_config(config: &BuildingConfig) -> BuildingResult<Self> {
        BuildingBuilder::from(config.clone()).build()
    }

    // ── Step protocol ─────────────────────────────────────────────────────

    /// Run one step.  See the [type-level docs](Building) for the order of
    /// phases.
    pub fn execute_step(
        &mut self,
        arrivals: &[NewPassenger],
        actions:  &[ActionKind],
    ) -> BuildingResult<()> {
        // ── Phase 1: validate before touching anything ────────────────────
        if actions.len() != self.elevators.len() {
            return Err(BuildingError::ActionCountMismatch {
                expected: self.elevators.len(),
                got:      actions.len(),
            });
        }
        for arrival in arrivals {
            self.check_arrival(arrival)?;
        }

        // ── Phase 2: clear per-step outputs ───────────────────────────────
        self.deboarded.clear();
        self.rejected.clear();
        self.correct_moves = 0;
        self.incorrect_moves = 0;

        // ── Phase 3: expiry ───────────────────────────────────────────────
        self.expired = self.queues.remove_expired();

        // ── Phase 4: arrival intake ───────────────────────────────────────
        for arrival in arrivals {
            self.admit(arrival)?;
        }

        // ── Phase 5: actions, ascending elevator index ────────────────────
        for (index, &action) in actions.iter().enumerate() {
            self.apply_action(index, action)?;
        }

        // ── Phase 6: aging ────────────────────────────────────────────────
        self.queues.age_all();
        for elevator in &mut self.elevators {
            elevator.age_occupants();
        }

        if !self.rejected.is_empty() || !self.expired.is_empty() {
            debug!(
                step = self.step.0,
                rejected = self.rejected.len(),
                expired = self.expired.len(),
                "passengers lost"
            );
        }
        self.step = self.step + 1;
        Ok(())
    }

    /// Empty every queue and elevator and return elevators to their start
    /// floors.  Passenger ids and the step counter start over.
    pub fn reset(&mut self) {
        self.queues.clear();
        for elevator in &mut self.elevators {
            elevator.reset();
        }
        self.step = Tick::ZERO;
        self.next_passenger = 0;
        self.deboarded.clear();
        self.rejected.clear();
        self.expired.clear();
        self.correct_moves = 0;
        self.incorrect_moves = 0;
    }

    fn check_arrival(&self, arrival: &NewPassenger) -> BuildingResult<()> {
        for floor in [arrival.start_floor, arrival.destination_floor] {
            if floor >= self.num_floors {
                return Err(BuildingError::FloorOutOfRange { floor, num_floors: self.num_floors });
            }
        }
        if arrival.start_floor == arrival.destination_floor {
            return Err(BuildingError::SameFloor { floor: arrival.start_floor });
        }
        Ok(())
    }

    fn admit(&mut self, arrival: &NewPassenger) -> BuildingResult<()> {
        let passenger = Passenger::new(
            PassengerId(self.next_passenger),
            arrival.start_step,
            arrival.start_floor,
            arrival.destination_floor,
            arrival.max_wait_steps,
        )?;
        self.next_passenger += 1;
        if let Err(turned_away) = self.queues.try_admit(passenger) {
            self.rejected.push(turned_away);
        }
        Ok(())
    }

    fn apply_action(&mut self, index: usize, action: ActionKind) -> BuildingResult<()> {
        let elevator = &mut self.elevators[index];
        trace!(elevator = index, floor = elevator.floor(), %action, "apply");

        if let Some(delta) = action.move_delta() {
            let before = elevator.floor();
            elevator.move_by(delta);
            let (correct, incorrect) = elevator.direction_move_counts(before);
            self.correct_moves += correct;
            self.incorrect_moves += incorrect;
        } else if let Some(direction) = action.load_direction() {
            let boarding = self.queues.take_front(
                elevator.floor(),
                direction,
                elevator.available_capacity(),
            );
            elevator.load(boarding)?;
        } else if action == ActionKind::Unload {
            self.deboarded.extend(elevator.unload());
        }
        Ok(())
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    pub fn num_elevators(&self) -> usize {
        self.elevators.len()
    }

    pub fn max_queue(&self) -> usize {
        self.queues.max_queue()
    }

    /// Number of steps executed since construction or the last reset.
    pub fn current_step(&self) -> Tick {
        self.step
    }

    // ── Elevators ─────────────────────────────────────────────────────────

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.index())
    }

    /// Passengers inside elevators.
    pub fn total_in_transit(&self) -> usize {
        self.elevators.iter().map(Elevator::occupancy).sum()
    }

    // ── Queues ────────────────────────────────────────────────────────────

    pub fn queues(&self) -> &FloorQueues {
        &self.queues
    }

    /// One hall queue, front first.  `None` for floors outside the building.
    pub fn queue(&self, floor: Floor, direction: Direction) -> Option<&VecDeque<Passenger>> {
        self.queues.get(floor, direction)
    }

    pub fn queue_len(&self, floor: Floor, direction: Direction) -> usize {
        self.queues.len(floor, direction)
    }

    /// Passengers waiting in hall queues.
    pub fn total_queued(&self) -> usize {
        self.queues.total_len()
    }

    // ── Buttons and observation ───────────────────────────────────────────

    /// Per floor, `[up, down]`: is anyone waiting in that queue?
    pub fn hall_buttons(&self) -> Vec<[bool; 2]> {
        (0..self.num_floors)
            .map(|f| {
                [
                    self.queues.is_waiting(f, Direction::Up),
                    self.queues.is_waiting(f, Direction::Down),
                ]
            })
            .collect()
    }

    /// Per elevator, per floor: is some occupant bound for that floor?
    pub fn destination_buttons(&self) -> Vec<Vec<bool>> {
        self.elevators
            .iter()
            .map(|e| e.destination_flags(self.num_floors))
            .collect()
    }

    /// The limited observation view.
    pub fn observe(&self) -> Observation {
        Observation {
            elevator_floors:     self.elevators.iter().map(Elevator::floor).collect(),
            destination_buttons: self.destination_buttons(),
            hall_buttons:        self.hall_buttons(),
        }
    }

    // ── Last step's outcome ───────────────────────────────────────────────

    /// Passengers delivered during the last step, in unload order.
    pub fn deboarded(&self) -> &[Passenger] {
        &self.deboarded
    }

    /// Arrivals turned away by a full queue during the last step.
    pub fn rejected(&self) -> &[Passenger] {
        &self.rejected
    }

    /// Passengers who gave up waiting during the last step.
    pub fn expired(&self) -> &[Passenger] {
        &self.expired
    }

    pub fn correct_moves(&self) -> usize {
        self.correct_moves
    }

    pub fn incorrect_moves(&self) -> usize {
        self.incorrect_moves
    }

    /// Reward components for the last step.
    pub fn outcome(&self) -> StepOutcome {
        StepOutcome {
            deboarded:       self.deboarded.len(),
            rejected:        self.rejected.len(),
            expired:         self.expired.len(),
            correct_moves:   self.correct_moves,
            incorrect_moves: self.incorrect_moves,
            queued:          self.total_queued(),
            in_transit:      self.total_in_transit(),
        }
    }
}
