//! Run the default canteen scenario for several seeds in parallel and export the logs.
//!
//! Run with: cargo run -p kantin_experiments --example replications -- out.csv

use kantin_core::CanteenConfig;
use kantin_experiments::{export_to_csv, export_to_json, run_replications};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = CanteenConfig::default();
    let seeds: Vec<u64> = (1..=16).collect();
    let replications = run_replications(&config, &seeds, None, true)?;

    for replication in &replications {
        let end = replication.records.last().map(|r| r.time).unwrap_or(0.0);
        println!(
            "seed {:>3}: {} records, finished at {:.1} s",
            replication.seed,
            replication.records.len(),
            end
        );
    }

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "replications.csv".to_string());
    if path.ends_with(".json") {
        export_to_json(&replications, &path)?;
    } else {
        export_to_csv(&replications, &path)?;
    }
    println!("Exported to {path}");
    Ok(())
}
