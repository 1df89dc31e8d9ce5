//! `lift-building`: passengers, elevators, hall queues, and the building
//! that steps them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`passenger`]   | `Passenger` (one rider: trip, patience, age, wait)        |
//! | [`elevator`]    | `Elevator` (position, bounds, capacity, occupants)        |
//! | [`queue`]       | `FloorQueues` (bounded FIFO up/down queue per floor)      |
//! | [`building`]    | `Building` and its `execute_step` protocol                |
//! | [`builder`]     | `BuildingBuilder` (fluent, validated construction)        |
//! | [`config`]      | `BuildingConfig`, `Capacities` (file-loadable shape)      |
//! | [`observation`] | `Observation` (positions and lit buttons)                 |
//! | [`outcome`]     | `StepOutcome` (raw reward components)                     |
//! | [`error`]       | `BuildingError`, `BuildingResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on config and output types. |

pub mod builder;
pub mod building;
pub mod config;
pub mod elevator;
pub mod error;
pub mod observation;
pub mod outcome;
pub mod passenger;
pub mod queue;

#[cfg(test)]
mod tests;

pub use builder::BuildingBuilder;
pub use building::Building;
pub use config::{BuildingConfig, Capacities, DEFAULT_MAX_QUEUE};
pub use elevator::Elevator;
pub use error::{BuildingError, BuildingResult};
pub use observation::Observation;
pub use outcome::StepOutcome;
pub use passenger::Passenger;
pub use queue::FloorQueues;
