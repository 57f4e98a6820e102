//! Run the default canteen scenario (60 tables × 3 trays, 7 workers) and print the event log.
//!
//! Run with: cargo run -p kantin_core --example canteen_run
//! Set RUST_LOG=kantin_core=debug to follow every grant and release.

use kantin_core::event_export::write_event_log_parquet;
use kantin_core::event_log::StageLabel;
use kantin_core::{simulate, CanteenConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    const SEED: u64 = 123;
    let config = CanteenConfig::default().with_seed(SEED);
    let records = simulate(&config)?;

    println!(
        "--- Canteen run ({} tables × {} trays, {} workers, seed {}) ---",
        config.table_count, config.people_per_table, config.worker_count, SEED
    );
    println!("Records: {}", records.len());
    if let Some(last) = records.last() {
        println!("Simulation time: {:.2} s ({:.1} min)", last.time, last.time / 60.0);
    }

    const SAMPLE: usize = 20;
    println!("\nFirst {SAMPLE} completions:");
    for record in records
        .iter()
        .filter(|r| r.stage == StageLabel::AllStagesComplete)
        .take(SAMPLE)
    {
        println!("  {:>12}  {:>9.2} s", record.job_id, record.time);
    }

    if let Some(path) = std::env::args().nth(1) {
        write_event_log_parquet(&path, &records)?;
        println!("\nEvent log written to {path}");
    }
    Ok(())
}
