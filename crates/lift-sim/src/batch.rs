//! Independent episodes over a list of seeds.

use std::sync::Arc;

use tracing::info;

use lift_arrivals::PassengerArrivals;
use lift_building::Building;
use lift_core::SimConfig;
use lift_dispatch::DispatchPolicy;

use crate::{EpisodeSummary, NoopObserver, SimBuilder, SimResult};

/// Run one full episode per seed, each on its own clone of `building`.
///
/// Results come back in the order of `seeds`.  With the `parallel` feature
/// the episodes run on Rayon's pool, sized by `config.num_threads` when set;
/// since every episode owns its state and its random streams, the results
/// are identical either way.
pub fn run_episodes<P: DispatchPolicy>(
    building: &Building,
    arrivals: &PassengerArrivals,
    config:   &SimConfig,
    policy:   Arc<P>,
    seeds:    &[u64],
) -> SimResult<Vec<EpisodeSummary>> {
    info!(episodes = seeds.len(), total_ticks = config.total_ticks, "running episodes");
    let run_one = |seed: u64| -> SimResult<EpisodeSummary> {
        SimBuilder::new(config.clone(), building.clone(), arrivals.clone(), Arc::clone(&policy))
            .seed(seed)
            .build()?
            .run(&mut NoopObserver)
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let sweep = || -> SimResult<Vec<EpisodeSummary>> {
            seeds.par_iter().map(|&seed| run_one(seed)).collect()
        };
        match config.num_threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| crate::SimError::Config(format!("thread pool: {e}")))?
                .install(sweep),
            None => sweep(),
        }
    }
}
