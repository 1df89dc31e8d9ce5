//! `lift-arrivals`: where passengers come from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`arrivals`]  | `ArrivalRates` (raw table), `PassengerArrivals` (sampler) |
//! | [`loader`]    | `load_arrivals_csv`, `load_arrivals_reader`               |
//! | [`error`]     | `ArrivalsError`, `ArrivalsResult<T>`                      |
//!
//! The building never draws random numbers itself: the episode driver asks
//! this crate for the step's [`NewPassenger`](lift_core::NewPassenger)
//! records and hands them to `Building::execute_step`.

pub mod arrivals;
pub mod error;
pub mod loader;


pub use arrivals::{ArrivalRates, PassengerArrivals};
pub use error::{ArrivalsError, ArrivalsResult};
pub use loader::{load_arrivals_csv, load_arrivals_reader, load_rates_reader};
