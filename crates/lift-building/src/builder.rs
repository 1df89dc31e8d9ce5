//! Fluent builder for constructing a [`Building`].

use lift_core::Floor;

use crate::config::DEFAULT_MAX_QUEUE;
use crate::{Building, BuildingError, BuildingResult, Capacities, Elevator};

/// Fluent builder for [`Building`].
///
/// # Required inputs
///
/// - `num_floors` (at least 2) and `num_elevators` (at least 1)
/// - elevator capacities, via [`capacity`](Self::capacity) or
///   [`capacities`](Self::capacities)
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                          |
/// |----------------------|----------------------------------|
/// | `.max_queue(n)`      | 20                               |
/// | `.start_floors(v)`   | Every elevator at floor 0        |
/// | `.bounds(v)`         | Every elevator serves `[0, num_floors - 1]` |
///
/// Everything is validated in [`build`](Self::build) before a single queue
/// or elevator is allocated, so a failed build leaves nothing behind.
///
/// # Example
///
/// ```rust
/// use lift_building::BuildingBuilder;
///
/// let building = BuildingBuilder::new(10, 2)
///     .max_queue(20)
///     .capacity(10)
///     .start_floors(vec![0, 5])
///     .build()
///     .unwrap();
/// assert_eq!(building.num_elevators(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BuildingBuilder {
    num_floors:    u32,
    num_elevators: usize,
    max_queue:     usize,
    capacities:    Option<Capacities>,
    start_floors:  Option<Vec<Floor>>,
    bounds:        Option<Vec<(Floor, Floor)>>,
}

impl BuildingBuilder {
    pub fn new(num_floors: u32, num_elevators: usize) -> Self {
        Self {
            num_floors,
            num_elevators,
            max_queue:    DEFAULT_MAX_QUEUE,
            capacities:   None,
            start_floors: None,
            bounds:       None,
        }
    }

    /// Maximum length of each hall queue.  Zero turns every arrival away.
    pub fn max_queue(mut self, max_queue: usize) -> Self {
        self.max_queue = max_queue;
        self
    }

    /// Same capacity for every elevator.
    pub fn capacity(self, capacity: usize) -> Self {
        self.capacities(Capacities::Uniform(capacity))
    }

    /// Uniform or per-elevator capacities.  A per-elevator list must have
    /// one entry per elevator; a single-entry list applies to all of them.
    pub fn capacities(mut self, capacities: impl Into<Capacities>) -> Self {
        self.capacities = Some(capacities.into());
        self
    }

    /// Starting floor of each elevator (one entry per elevator).  Floors
    /// outside an elevator's bounds are clamped into them.
    pub fn start_floors(mut self, floors: Vec<Floor>) -> Self {
        self.start_floors = Some(floors);
        self
    }

    /// Inclusive `(min_floor, max_floor)` of each elevator (one entry per
    /// elevator).
    pub fn bounds(mut self, bounds: Vec<(Floor, Floor)>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Validate inputs and return an empty building at step 0.
    pub fn build(self) -> BuildingResult<Building> {
        let n = self.num_elevators;

        // ── Validate shape ────────────────────────────────────────────────
        if self.num_floors < 2 {
            return Err(BuildingError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.num_floors
            )));
        }
        if n == 0 {
            return Err(BuildingError::Config("a building needs at least 1 elevator".into()));
        }

        // ── Resolve per-elevator inputs ───────────────────────────────────
        let capacities = match self.capacities {
            None => return Err(BuildingError::MissingCapacity),
            Some(Capacities::Uniform(c)) => vec![c; n],
            Some(Capacities::PerElevator(v)) if v.len() == 1 => vec![v[0]; n],
            Some(Capacities::PerElevator(v)) => {
                check_len(n, v.len(), "elevator capacities")?;
                v
            }
        };

        let bounds = match self.bounds {
            Some(b) => {
                check_len(n, b.len(), "elevator bounds")?;
                for (elevator, &(min, max)) in b.iter().enumerate() {
                    if min > max || max >= self.num_floors {
                        return Err(BuildingError::InvalidBounds {
                            elevator,
                            min,
                            max,
                            num_floors: self.num_floors,
                        });
                    }
                }
                b
            }
            None => vec![(0, self.num_floors - 1); n],
        };

        let start_floors = match self.start_floors {
            Some(f) => {
                check_len(n, f.len(), "elevator start floors")?;
                f
            }
            None => vec![0; n],
        };

        // ── Construct ─────────────────────────────────────────────────────
        let elevators = start_floors
            .into_iter()
            .zip(capacities)
            .zip(bounds)
            .map(|((start, capacity), (min, max))| Elevator::new(start, capacity, min, max))
            .collect();

        Ok(Building::new(self.num_floors, self.max_queue, elevators))
    }
}

fn check_len(expected: usize, got: usize, what: &'static str) -> BuildingResult<()> {
    if got != expected {
        return Err(BuildingError::ElevatorCountMismatch { expected, got, what });
    }
    Ok(())
}
