//! Per-floor Poisson arrivals with categorical destinations.
//!
//! # Model
//!
//! Each step, floor `f` produces `k ~ Poisson(λ_f)` new passengers.  Each of
//! them independently draws a destination from row `f` of the destination
//! table (weights need not sum to one; they are normalized).  Floors are
//! visited in ascending order for both draws, so the arrival list comes out
//! grouped by start floor.
//!
//! All randomness comes from the caller's [`SimRng`]; the same seed always
//! produces the same passengers.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand_distr::Poisson;
use tracing::trace;

use lift_core::{Floor, NewPassenger, SimRng, Tick};

use crate::{ArrivalsError, ArrivalsResult};

// ── Default table constants ──────────────────────────────────────────────────

/// Ground-floor arrival rate per elevator, per step.
const GROUND_RATE_PER_ELEVATOR: f64 = 0.5;

/// Probability that a passenger starting above the ground floor is heading
/// down to it.
const GROUND_DESTINATION_PROB: f64 = 0.8;

// ── ArrivalRates ─────────────────────────────────────────────────────────────

/// The raw arrival table: one Poisson rate per floor and one destination
/// weight row per floor.
///
/// This is the serializable form; [`PassengerArrivals`] validates it and
/// prepares the samplers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrivalRates {
    pub num_floors:              u32,
    /// `floor_arrival_rates[f]` = mean arrivals per step at floor `f`.
    pub floor_arrival_rates:     Vec<f64>,
    /// `floor_destination_rates[s][d]` = weight of destination `d` for a
    /// passenger starting at `s`.  `[s][s]` must be zero.
    pub floor_destination_rates: Vec<Vec<f64>>,
}

impl ArrivalRates {
    /// The baseline office-building table.
    ///
    /// Most traffic enters at the ground floor (rate `0.5 * num_elevators`)
    /// and spreads evenly over the floors above.  Every other floor sees
    /// `0.5 * num_elevators / num_floors` arrivals per step, 80 % of whom
    /// head for the ground floor; the remaining 20 % split evenly over the
    /// other floors.  In a two-floor building everyone upstairs goes down.
    pub fn default_for(num_elevators: usize, num_floors: u32) -> ArrivalsResult<Self> {
        if num_floors < 2 {
            return Err(ArrivalsError::Config(format!(
                "arrival tables need at least 2 floors, got {num_floors}"
            )));
        }
        let n = num_floors as usize;
        let ground_rate = GROUND_RATE_PER_ELEVATOR * num_elevators as f64;
        let other_rate = ground_rate / n as f64;

        let mut floor_arrival_rates = vec![other_rate; n];
        floor_arrival_rates[0] = ground_rate;

        let mut floor_destination_rates = Vec::with_capacity(n);
        let mut ground_row = vec![1.0 / (n - 1) as f64; n];
        ground_row[0] = 0.0;
        floor_destination_rates.push(ground_row);

        let (to_ground, to_other) = if n > 2 {
            (GROUND_DESTINATION_PROB, (1.0 - GROUND_DESTINATION_PROB) / (n - 2) as f64)
        } else {
            (1.0, 0.0)
        };
        for start in 1..n {
            let row = (0..n)
                .map(|dest| match dest {
                    0 => to_ground,
                    d if d == start => 0.0,
                    _ => to_other,
                })
                .collect();
            floor_destination_rates.push(row);
        }

        Ok(Self { num_floors, floor_arrival_rates, floor_destination_rates })
    }

    /// Check shape and values.  Called by [`PassengerArrivals::new`].
    pub fn validate(&self) -> ArrivalsResult<()> {
        let n = self.num_floors as usize;
        if n < 2 {
            return Err(ArrivalsError::Config(format!(
                "arrival tables need at least 2 floors, got {n}"
            )));
        }
        if self.floor_arrival_rates.len() != n {
            return Err(ArrivalsError::Config(format!(
                "{} arrival rates for a {n}-floor building",
                self.floor_arrival_rates.len()
            )));
        }
        if self.floor_destination_rates.len() != n {
            return Err(ArrivalsError::Config(format!(
                "{} destination rows for a {n}-floor building",
                self.floor_destination_rates.len()
            )));
        }

        for (floor, &rate) in self.floor_arrival_rates.iter().enumerate() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ArrivalsError::Config(format!(
                    "floor {floor} arrival rate {rate} must be finite and non-negative"
                )));
            }
        }

        for (start, row) in self.floor_destination_rates.iter().enumerate() {
            if row.len() != n {
                return Err(ArrivalsError::Config(format!(
                    "destination row for floor {start} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some(p) = row.iter().find(|p| !p.is_finite() || **p < 0.0) {
                return Err(ArrivalsError::Config(format!(
                    "floor {start} destination weight {p} must be finite and non-negative"
                )));
            }
            if row[start] != 0.0 {
                return Err(ArrivalsError::Config(format!(
                    "floor {start} must not list itself as a destination"
                )));
            }
            if self.floor_arrival_rates[start] > 0.0 && row.iter().sum::<f64>() <= 0.0 {
                return Err(ArrivalsError::Config(format!(
                    "floor {start} has arrivals but no destinations"
                )));
            }
        }
        Ok(())
    }
}

// ── PassengerArrivals ────────────────────────────────────────────────────────

/// Validated arrival table with prepared samplers.
///
/// A floor with rate zero has no Poisson sampler and always yields zero
/// arrivals.  A floor whose destination row is all zeros has no destination
/// sampler; validation guarantees such a floor also has rate zero.
#[derive(Clone, Debug)]
pub struct PassengerArrivals {
    rates:        ArrivalRates,
    counts:       Vec<Option<Poisson<f64>>>,
    destinations: Vec<Option<WeightedIndex<f64>>>,
}

impl PassengerArrivals {
    /// Validate and prepare an arrival table.
    pub fn new(
        num_floors:              u32,
        floor_arrival_rates:     Vec<f64>,
        floor_destination_rates: Vec<Vec<f64>>,
    ) -> ArrivalsResult<Self> {
        Self::from_rates(ArrivalRates { num_floors, floor_arrival_rates, floor_destination_rates })
    }

    pub fn from_rates(rates: ArrivalRates) -> ArrivalsResult<Self> {
        rates.validate()?;

        let counts = rates
            .floor_arrival_rates
            .iter()
            .map(|&lambda| {
                if lambda > 0.0 {
                    Poisson::new(lambda)
                        .map(Some)
                        .map_err(|e| ArrivalsError::Config(format!("arrival rate {lambda}: {e}")))
                } else {
                    Ok(None)
                }
            })
            .collect::<ArrivalsResult<Vec<_>>>()?;

        let destinations = rates
            .floor_destination_rates
            .iter()
            .map(|row| {
                if row.iter().sum::<f64>() > 0.0 {
                    WeightedIndex::new(row)
                        .map(Some)
                        .map_err(|e| ArrivalsError::Config(format!("destination weights: {e}")))
                } else {
                    Ok(None)
                }
            })
            .collect::<ArrivalsResult<Vec<_>>>()?;

        Ok(Self { rates, counts, destinations })
    }

    /// Prepared [`ArrivalRates::default_for`] table.
    pub fn default_for(num_elevators: usize, num_floors: u32) -> ArrivalsResult<Self> {
        Self::from_rates(ArrivalRates::default_for(num_elevators, num_floors)?)
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Number of new passengers on each floor this step.
    pub fn generate_counts(&self, rng: &mut SimRng) -> Vec<usize> {
        self.counts
            .iter()
            .map(|sampler| match sampler {
                // Poisson samples are non-negative whole numbers.
                Some(poisson) => poisson.sample(rng.inner()) as usize,
                None => 0,
            })
            .collect()
    }

    /// One `(start_floor, destination_floor)` pair per arrival, grouped by
    /// start floor in ascending order.
    ///
    /// `counts` is indexed by floor; entries beyond the building are ignored,
    /// as are counts on floors without any destination.
    pub fn assign_destinations(&self, counts: &[usize], rng: &mut SimRng) -> Vec<(Floor, Floor)> {
        let mut trips = Vec::with_capacity(counts.iter().sum());
        for (start, (&count, sampler)) in counts.iter().zip(&self.destinations).enumerate() {
            let Some(sampler) = sampler else { continue };
            for _ in 0..count {
                trips.push((start as Floor, sampler.sample(rng.inner()) as Floor));
            }
        }
        trips
    }

    /// Draw this step's new passengers.
    pub fn generate(&self, step: Tick, max_wait_steps: u64, rng: &mut SimRng) -> Vec<NewPassenger> {
        let counts = self.generate_counts(rng);
        let passengers: Vec<NewPassenger> = self
            .assign_destinations(&counts, rng)
            .into_iter()
            .map(|(start, dest)| NewPassenger::new(start, dest, step, max_wait_steps))
            .collect();
        trace!(step = step.0, arrivals = passengers.len(), "generated arrivals");
        passengers
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn num_floors(&self) -> u32 {
        self.rates.num_floors
    }

    pub fn rates(&self) -> &ArrivalRates {
        &self.rates
    }

    /// Expected arrivals per step across the whole building.
    pub fn expected_per_step(&self) -> f64 {
        self.rates.floor_arrival_rates.iter().sum()
    }
}
