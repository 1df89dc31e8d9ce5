//! `lift-sim`: episode driver for the lift simulator.
//!
//! # Step loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   1. decide   DispatchPolicy::decide reads the building and its
//!               observation and returns one action per elevator.
//!   2. arrive   PassengerArrivals::generate draws this step's passengers
//!               from the arrival stream.
//!   3. execute  Building::execute_step: expiry, intake, actions, aging.
//!   4. record   fold the StepOutcome into the EpisodeSummary, notify
//!               observers, advance the clock.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `run_episodes` runs independent episodes on Rayon.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let building = BuildingBuilder::new(10, 3).capacity(10).build()?;
//! let arrivals = PassengerArrivals::default_for(3, 10)?;
//! let mut sim = SimBuilder::new(config, building, arrivals, NearestCallPolicy).build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod summary;


pub use batch::run_episodes;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use summary::EpisodeSummary;
