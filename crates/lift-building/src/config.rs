//! Serializable building configuration.

use lift_core::Floor;

use crate::{Building, BuildingBuilder, BuildingResult};

/// Default bound on each hall queue.
pub const DEFAULT_MAX_QUEUE: usize = 20;

/// Elevator capacities: one value for every car, or one per car.
///
/// In JSON either form is accepted: `10` or `[10, 8, 8]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Capacities {
    Uniform(usize),
    PerElevator(Vec<usize>),
}

impl From<usize> for Capacities {
    fn from(capacity: usize) -> Self {
        Capacities::Uniform(capacity)
    }
}

impl From<Vec<usize>> for Capacities {
    fn from(capacities: Vec<usize>) -> Self {
        Capacities::PerElevator(capacities)
    }
}

/// Building shape and elevator fleet, as loaded from a configuration file.
///
/// ```json
/// {
///   "num_floors": 10,
///   "num_elevators": 2,
///   "max_queue": 20,
///   "elevator_capacities": 10,
///   "elevator_start_floors": [0, 5],
///   "elevator_bounds": [[0, 9], [0, 9]]
/// }
/// ```
///
/// `max_queue` defaults to [`DEFAULT_MAX_QUEUE`]; start floors default to 0
/// and bounds to the whole building.  `elevator_capacities` has no default:
/// leaving it out is a configuration error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    pub num_floors:            u32,
    pub num_elevators:         usize,
    #[cfg_attr(feature = "serde", serde(default = "default_max_queue"))]
    pub max_queue:             usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevator_capacities:   Option<Capacities>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevator_start_floors: Option<Vec<Floor>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevator_bounds:       Option<Vec<(Floor, Floor)>>,
}

#[cfg(feature = "serde")]
fn default_max_queue() -> usize {
    DEFAULT_MAX_QUEUE
}

impl BuildingConfig {
    /// Validate and construct the building.
    pub fn build(&self) -> BuildingResult<Building> {
        Building::from_config(self)
    }
}

impl From<BuildingConfig> for BuildingBuilder {
    fn from(config: BuildingConfig) -> Self {
        let mut builder = BuildingBuilder::new(config.num_floors, config.num_elevators)
            .max_queue(config.max_queue);
        if let Some(capacities) = config.elevator_capacities {
            builder = builder.capacities(capacities);
        }
        if let Some(floors) = config.elevator_start_floors {
            builder = builder.start_floors(floors);
        }
        if let Some(bounds) = config.elevator_bounds {
            builder = builder.bounds(bounds);
        }
        builder
    }
}
