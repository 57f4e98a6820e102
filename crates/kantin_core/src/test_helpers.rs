//! Canned canteen configurations and event-log lookups shared by unit and
//! integration tests.

use std::collections::HashMap;

use crate::durations::StageDurations;
use crate::event_log::{EventRecord, StageLabel};
use crate::scenario::CanteenConfig;

/// The single-tray configuration with fixed 30/20/30 second stages.
pub fn single_tray_config() -> CanteenConfig {
    CanteenConfig::default()
        .with_tables(1, 1)
        .with_workers(1)
        .with_stage_durations(StageDurations::fixed(30.0, 20.0, 30.0))
}

/// A small seeded configuration that keeps the worker pool saturated.
pub fn busy_config(seed: u64) -> CanteenConfig {
    CanteenConfig::default()
        .with_tables(4, 3)
        .with_workers(2)
        .with_seed(seed)
}

/// Group records by job id, keeping each job's emission order.
pub fn records_by_job(records: &[EventRecord]) -> HashMap<&str, Vec<&EventRecord>> {
    let mut by_job: HashMap<&str, Vec<&EventRecord>> = HashMap::new();
    for record in records {
        by_job.entry(record.job_id.as_str()).or_default().push(record);
    }
    by_job
}

/// Time of the first record with `stage` for `job_id`.
///
/// # Panics
///
/// Panics if the job never emitted that stage.
pub fn stage_time(records: &[EventRecord], job_id: &str, stage: StageLabel) -> f64 {
    records
        .iter()
        .find(|r| r.job_id == job_id && r.stage == stage)
        .map(|r| r.time)
        .unwrap_or_else(|| panic!("{job_id} has no {stage} record"))
}
