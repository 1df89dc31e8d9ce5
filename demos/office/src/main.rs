//! office: an elevator bank in a mid-rise office building.
//!
//! Runs one episode under the nearest-call heuristic, writing per-step
//! summaries and periodic elevator snapshots as CSV, then compares the
//! heuristic against the random and idle baselines over a seed sweep.
//!
//! ```text
//! cargo run -p office                       # built-in 10-floor building
//! cargo run -p office -- demos/office/office.json
//! RUST_LOG=lift_building=debug cargo run -p office
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_arrivals::{PassengerArrivals, load_arrivals_csv};
use lift_building::{Building, BuildingConfig, Capacities};
use lift_core::SimConfig;
use lift_dispatch::{DispatchPolicy, NearestCallPolicy, RandomPolicy, WaitPolicy};
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{EpisodeSummary, SimBuilder, run_episodes};

// ── Defaults ──────────────────────────────────────────────────────────────────

const FLOORS:                u32   = 10;
const ELEVATORS:             usize = 2;
const CAPACITY:              usize = 8;
const SEED:                  u64   = 42;
const TICK_DURATION_SECS:    u32   = 5;
const TOTAL_TICKS:           u64   = 720; // one hour
const MAX_WAIT_STEPS:        u64   = 60;
const OUTPUT_INTERVAL_TICKS: u64   = 12;  // one snapshot per minute

// ── Configuration file ────────────────────────────────────────────────────────

/// Optional CSV arrival tables; the default office table is used otherwise.
#[derive(Debug, Deserialize)]
struct ArrivalFiles {
    rates_csv:        PathBuf,
    destinations_csv: PathBuf,
}

#[derive(Debug, Deserialize)]
struct OfficeConfig {
    building:    BuildingConfig,
    sim:         SimConfig,
    #[serde(default)]
    arrivals:    Option<ArrivalFiles>,
    #[serde(default = "default_output_dir")]
    output_dir:  PathBuf,
    #[serde(default)]
    sweep_seeds: Vec<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output/office")
}

impl OfficeConfig {
    fn builtin() -> Self {
        Self {
            building: BuildingConfig {
                num_floors:            FLOORS,
                num_elevators:         ELEVATORS,
                max_queue:             lift_building::DEFAULT_MAX_QUEUE,
                elevator_capacities:   Some(Capacities::Uniform(CAPACITY)),
                elevator_start_floors: None,
                elevator_bounds:       None,
            },
            sim: SimConfig {
                start_unix_secs:       1_700_000_000,
                tick_duration_secs:    TICK_DURATION_SECS,
                total_ticks:           TOTAL_TICKS,
                seed:                  SEED,
                max_wait_steps:        MAX_WAIT_STEPS,
                num_threads:           None,
                output_interval_ticks: OUTPUT_INTERVAL_TICKS,
            },
            arrivals:    None,
            output_dir:  default_output_dir(),
            sweep_seeds: (1..=8).collect(),
        }
    }

    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    fn arrivals(&self) -> Result<PassengerArrivals> {
        let floors = self.building.num_floors;
        let arrivals = match &self.arrivals {
            Some(files) => load_arrivals_csv(&files.rates_csv, &files.destinations_csv, floors)?,
            None => PassengerArrivals::default_for(self.building.num_elevators, floors)?,
        };
        Ok(arrivals)
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_summary(summary: &EpisodeSummary) {
    let t = &summary.totals;
    println!("  arrivals         : {}", summary.arrivals);
    println!("  delivered        : {}", t.deboarded);
    println!("  turned away      : {}", t.rejected);
    println!("  gave up waiting  : {}", t.expired);
    println!("  moves (+/-)      : {} / {}", t.correct_moves, t.incorrect_moves);
    println!("  delivery rate    : {:.1} %", summary.delivery_rate() * 100.0);
    println!("  mean queued      : {:.2}", summary.mean_queued());
}

fn sweep<P: DispatchPolicy>(
    name:     &str,
    building: &Building,
    arrivals: &PassengerArrivals,
    config:   &SimConfig,
    policy:   P,
    seeds:    &[u64],
) -> Result<()> {
    let results = run_episodes(building, arrivals, config, Arc::new(policy), seeds)?;
    let n = results.len().max(1) as f64;
    let rate = results.iter().map(EpisodeSummary::delivery_rate).sum::<f64>() / n;
    let expired = results.iter().map(|s| s.totals.expired).sum::<usize>() as f64 / n;
    println!("{name:<14} {:>12.1} % {expired:>14.1}", rate * 100.0);
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = match std::env::args_os().nth(1) {
        Some(path) => OfficeConfig::load(Path::new(&path))?,
        None => OfficeConfig::builtin(),
    };

    println!("=== office: elevator dispatch ===");
    println!(
        "Floors: {}  |  Elevators: {}  |  Ticks: {}  |  Seed: {}",
        cfg.building.num_floors, cfg.building.num_elevators, cfg.sim.total_ticks, cfg.sim.seed
    );

    // 1. Building and arrival process.
    let building = cfg.building.build()?;
    let arrivals = cfg.arrivals()?;
    println!("Expected arrivals per step: {:.2}", arrivals.expected_per_step());
    println!();

    // 2. One recorded episode under the heuristic.
    let mut sim = SimBuilder::new(cfg.sim.clone(), building.clone(), arrivals.clone(), NearestCallPolicy)
        .build()?;

    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating {}", cfg.output_dir.display()))?;
    let writer = CsvWriter::new(&cfg.output_dir)?;
    let mut obs = SimOutputObserver::new(writer, &cfg.sim);

    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Episode complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    print_summary(&summary);
    println!("  output           : {}", cfg.output_dir.display());
    println!();

    // 3. Final elevator positions.
    println!("{:<10} {:<7} {:<10} {:<12}", "Elevator", "Floor", "Riders", "Stops");
    println!("{}", "-".repeat(40));
    for (i, e) in sim.building.elevators().iter().enumerate() {
        let mut stops: Vec<_> = e.destinations().iter().copied().collect();
        stops.sort_unstable();
        println!("{:<10} {:<7} {:<10} {:?}", i, e.floor(), format!("{}/{}", e.occupancy(), e.capacity()), stops);
    }
    println!();

    // 4. Policy comparison over independent seeds.
    if cfg.sweep_seeds.is_empty() {
        return Ok(());
    }
    info!(seeds = cfg.sweep_seeds.len(), "policy sweep");
    println!("{:<14} {:>14} {:>14}", "Policy", "Delivered", "Expired/ep");
    println!("{}", "-".repeat(44));
    let seeds = &cfg.sweep_seeds;
    sweep("nearest-call", &building, &arrivals, &cfg.sim, NearestCallPolicy, seeds)?;
    sweep("random", &building, &arrivals, &cfg.sim, RandomPolicy::new(), seeds)?;
    sweep("wait", &building, &arrivals, &cfg.sim, WaitPolicy, seeds)?;

    Ok(())
}
