//! `lift-core`: shared vocabulary of the `lift` elevator-dispatch simulator.
//!
//! Every other `lift-*` crate depends on this one; it depends on none of
//! them.  External dependencies are `rand` and `thiserror`, plus `serde`
//! behind a feature.
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`ids`]     | `Floor`, `PassengerId`, `ElevatorId`                 |
//! | [`action`]  | `ActionKind` (six per-step actions), `Direction`     |
//! | [`request`] | `NewPassenger`, the arrival record                   |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                      |
//! | [`rng`]     | `SimRng`, seeded streams with child derivation       |
//! | [`error`]   | `LiftError`, `LiftResult`                            |
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! configuration and record types.

pub mod action;
pub mod error;
pub mod ids;
pub mod request;
pub mod rng;
pub mod time;


pub use action::{ActionKind, Direction};
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, Floor, PassengerId};
pub use request::NewPassenger;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
