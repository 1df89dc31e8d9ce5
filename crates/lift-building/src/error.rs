use lift_core::Floor;
use thiserror::Error;

/// Errors raised by building construction (configuration errors) and by
/// `Building::execute_step` (invocation errors).
///
/// Every invocation error is detected before the building is mutated.
/// Soft outcomes such as a full queue or a clamped move are never errors;
/// they show up in the step's outcome counters instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildingError {
    #[error("building configuration error: {0}")]
    Config(String),

    #[error("elevator capacities are required")]
    MissingCapacity,

    #[error("{what} length {got} does not match elevator count {expected}")]
    ElevatorCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("elevator {elevator} bounds [{min}, {max}] do not fit a {num_floors}-floor building")]
    InvalidBounds {
        elevator:   usize,
        min:        Floor,
        max:        Floor,
        num_floors: u32,
    },

    #[error("expected {expected} actions (one per elevator), got {got}")]
    ActionCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("passenger start floor {floor} equals their destination floor")]
    SameFloor { floor: Floor },

    #[error("floor {floor} is outside a {num_floors}-floor building")]
    FloorOutOfRange { floor: Floor, num_floors: u32 },

    #[error("cannot board {requested} passengers: {available} of {capacity} places free")]
    OverCapacity {
        requested: usize,
        available: usize,
        capacity:  usize,
    },
}

pub type BuildingResult<T> = Result<T, BuildingError>;
