//! Fluent builder for constructing a [`Sim`].

use std::path::Path;

use lift_arrivals::{PassengerArrivals, load_arrivals_csv};
use lift_building::Building;
use lift_core::SimConfig;
use lift_dispatch::DispatchPolicy;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, passenger patience, …
/// - [`Building`]: from [`lift_building::BuildingBuilder`] or a config file
/// - [`PassengerArrivals`]: for the same number of floors
/// - `P: DispatchPolicy`: the controller
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default             |
/// |----------------|---------------------|
/// | `.seed(s)`     | `config.seed`       |
/// | `.ticks(n)`    | `config.total_ticks`|
///
/// # Example
///
/// ```rust
/// use std::path::Path;
///
/// use lift_arrivals::{PassengerArrivals, load_arrivals_csv};
/// use lift_building::BuildingBuilder;
/// use lift_core::SimConfig;
/// use lift_dispatch::NearestCallPolicy;
/// use lift_sim::{NoopObserver, SimBuilder};
///
/// let building = BuildingBuilder::new(6, 2).capacity(8).build().unwrap();
/// let arrivals = PassengerArrivals::default_for(2, 6).unwrap();
/// let mut sim = SimBuilder::new(SimConfig::with_ticks(100, 7), building, arrivals, NearestCallPolicy)
///     .build()
///     .unwrap();
/// let summary = sim.run(&mut NoopObserver).unwrap();
/// assert_eq!(summary.steps, 100);
/// ```
pub struct SimBuilder<P: DispatchPolicy> {
    config:   SimConfig,
    building: Building,
    arrivals: PassengerArrivals,
    policy:   P,
}

impl<P: DispatchPolicy> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:   SimConfig,
        building: Building,
        arrivals: PassengerArrivals,
        policy:   P,
    ) -> Self {
        Self { config, building, arrivals, policy }
    }

    /// Use the default office arrival table for `building`'s shape.
    pub fn with_default_arrivals(config: SimConfig, building: Building, policy: P) -> SimResult<Self> {
        let arrivals = PassengerArrivals::default_for(building.num_elevators(), building.num_floors())?;
        Ok(Self::new(config, building, arrivals, policy))
    }

    /// Load the arrival table from a rates CSV and a destinations CSV
    /// covering `building`'s floors.
    pub fn with_arrival_files(
        config:            SimConfig,
        building:          Building,
        rates_path:        &Path,
        destinations_path: &Path,
        policy:            P,
    ) -> SimResult<Self> {
        let arrivals = load_arrivals_csv(rates_path, destinations_path, building.num_floors())?;
        Ok(Self::new(config, building, arrivals, policy))
    }

    /// Override the master seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Override the episode length.
    pub fn ticks(mut self, total_ticks: u64) -> Self {
        self.config.total_ticks = total_ticks;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        if self.arrivals.num_floors() != self.building.num_floors() {
            return Err(SimError::Config(format!(
                "arrival table covers {} floors but the building has {}",
                self.arrivals.num_floors(),
                self.building.num_floors()
            )));
        }

        Ok(Sim::new(self.config, self.building, self.arrivals, self.policy))
    }
}
