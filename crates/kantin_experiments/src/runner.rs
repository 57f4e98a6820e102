//! Parallel replication execution using rayon.

use indicatif::{ProgressBar, ProgressStyle};
use kantin_core::event_log::EventRecord;
use kantin_core::{simulate, CanteenConfig, SimError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Event log of one seeded run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replication {
    pub seed: u64,
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("replication with seed {seed} failed: {source}")]
    Simulation {
        seed: u64,
        #[source]
        source: SimError,
    },
}

/// Run `config` once with `seed` replacing its own seed.
pub fn run_replication(config: &CanteenConfig, seed: u64) -> Result<Replication, SimError> {
    let records = simulate(&config.clone().with_seed(seed))?;
    Ok(Replication { seed, records })
}

/// Run one replication per seed in parallel.
///
/// Uses rayon to execute runs across available CPU cores; `num_threads`
/// overrides the pool size. Output order equals `seeds` order, and every
/// replication is identical to a sequential run with the same seed.
pub fn run_replications(
    config: &CanteenConfig,
    seeds: &[u64],
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<Replication>, ExperimentError> {
    let total = seeds.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    info!(replications = total, jobs = config.total_jobs(), "starting replications");
    let pb_clone = pb.clone();
    let results: Vec<Result<Replication, ExperimentError>> = pool.install(|| {
        seeds
            .par_iter()
            .map(|&seed| {
                let result = run_replication(config, seed)
                    .map_err(|source| ExperimentError::Simulation { seed, source });
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                result
            })
            .collect()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    results.into_iter().collect()
}
