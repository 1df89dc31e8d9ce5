//! CSV arrival-table loader.
//!
//! # CSV format
//!
//! Two files.  Arrival rates, one row per floor:
//!
//! ```csv
//! floor,arrival_rate
//! 0,1.0
//! 1,0.1
//! 2,0.1
//! ```
//!
//! Destination weights, one row per non-zero `(start, destination)` pair:
//!
//! ```csv
//! start_floor,destination_floor,probability
//! 0,1,0.5
//! 0,2,0.5
//! 1,0,1.0
//! 2,0,1.0
//! ```
//!
//! Floors and pairs absent from the files are zero.  Listing the same floor
//! or pair twice is a parse error.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::Floor;

use crate::{ArrivalRates, ArrivalsError, ArrivalsResult, PassengerArrivals};

// ── CSV records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RateRecord {
    floor:        Floor,
    arrival_rate: f64,
}

#[derive(Deserialize)]
struct DestinationRecord {
    start_floor:       Floor,
    destination_floor: Floor,
    probability:       f64,
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Load and validate an arrival table from two CSV files.
pub fn load_arrivals_csv(
    rates_path:        &Path,
    destinations_path: &Path,
    num_floors:        u32,
) -> ArrivalsResult<PassengerArrivals> {
    let rates = std::fs::File::open(rates_path).map_err(ArrivalsError::Io)?;
    let destinations = std::fs::File::open(destinations_path).map_err(ArrivalsError::Io)?;
    load_arrivals_reader(rates, destinations, num_floors)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` sources.
pub fn load_arrivals_reader<R1: Read, R2: Read>(
    rates:        R1,
    destinations: R2,
    num_floors:   u32,
) -> ArrivalsResult<PassengerArrivals> {
    PassengerArrivals::from_rates(load_rates_reader(rates, destinations, num_floors)?)
}

/// Parse both tables into an unvalidated [`ArrivalRates`].
pub fn load_rates_reader<R1: Read, R2: Read>(
    rates:        R1,
    destinations: R2,
    num_floors:   u32,
) -> ArrivalsResult<ArrivalRates> {
    let n = num_floors as usize;

    // ── Arrival rates ─────────────────────────────────────────────────────
    let mut floor_arrival_rates = vec![0.0; n];
    let mut seen = vec![false; n];
    for result in csv::Reader::from_reader(rates).deserialize::<RateRecord>() {
        let row = result.map_err(|e| ArrivalsError::Parse(e.to_string()))?;
        let floor = check_floor(row.floor, num_floors)?;
        if std::mem::replace(&mut seen[floor], true) {
            return Err(ArrivalsError::Parse(format!("floor {} listed twice", row.floor)));
        }
        floor_arrival_rates[floor] = row.arrival_rate;
    }

    // ── Destination weights ───────────────────────────────────────────────
    let mut floor_destination_rates = vec![vec![0.0; n]; n];
    let mut seen = vec![vec![false; n]; n];
    for result in csv::Reader::from_reader(destinations).deserialize::<DestinationRecord>() {
        let row = result.map_err(|e| ArrivalsError::Parse(e.to_string()))?;
        let start = check_floor(row.start_floor, num_floors)?;
        let dest = check_floor(row.destination_floor, num_floors)?;
        if std::mem::replace(&mut seen[start][dest], true) {
            return Err(ArrivalsError::Parse(format!(
                "pair ({}, {}) listed twice",
                row.start_floor, row.destination_floor
            )));
        }
        floor_destination_rates[start][dest] = row.probability;
    }

    Ok(ArrivalRates { num_floors, floor_arrival_rates, floor_destination_rates })
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn check_floor(floor: Floor, num_floors: u32) -> ArrivalsResult<usize> {
    if floor < num_floors {
        Ok(floor as usize)
    } else {
        Err(ArrivalsError::Parse(format!(
            "floor {floor} is outside a {num_floors}-floor building"
        )))
    }
}
