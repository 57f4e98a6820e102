//! Parallel replications of the canteen simulation.
//!
//! Each replication runs one seed of the same [kantin_core::CanteenConfig] in
//! its own ECS world, so runs share no state and can be spread across a rayon
//! thread pool. The resulting event logs can be exported to CSV or JSON for
//! downstream analysis.
//!
//! # Quick Start
//!
//! ```no_run
//! use kantin_core::CanteenConfig;
//! use kantin_experiments::{export_to_csv, run_replications};
//!
//! let config = CanteenConfig::default().with_workers(5);
//! let replications = run_replications(&config, &[1, 2, 3, 4], None, true).unwrap();
//! export_to_csv(&replications, "replications.csv").unwrap();
//! ```

pub mod export;
pub mod runner;

pub use export::{export_to_csv, export_to_json};
pub use runner::{run_replication, run_replications, ExperimentError, Replication};
