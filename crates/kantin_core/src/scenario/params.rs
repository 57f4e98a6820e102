use bevy_ecs::prelude::Resource;

use crate::durations::{DurationRange, StageDurations};
use crate::error::ConfigError;
use crate::scenario::build::RECORDS_PER_JOB;

const DEFAULT_TABLE_COUNT: usize = 60;
const DEFAULT_PEOPLE_PER_TABLE: usize = 3;
const DEFAULT_WORKER_COUNT: usize = 7;

/// Simulation end time in seconds. When set, the runner stops processing events
/// once the next event would be at or after this time, leaving jobs mid-stage.
#[derive(Debug, Clone, Copy, Resource)]
pub struct SimulationEndTime(pub f64);

/// Parameters for building a canteen scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct CanteenConfig {
    pub table_count: usize,
    pub people_per_table: usize,
    pub worker_count: usize,
    pub stage_durations: StageDurations,
    /// Seed for the duration source. If None, seed 0 is used.
    pub seed: Option<u64>,
    /// Optional halt time in seconds. If None, the run drains every event.
    pub end_time_secs: Option<f64>,
}

impl Default for CanteenConfig {
    fn default() -> Self {
        Self {
            table_count: DEFAULT_TABLE_COUNT,
            people_per_table: DEFAULT_PEOPLE_PER_TABLE,
            worker_count: DEFAULT_WORKER_COUNT,
            stage_durations: StageDurations::default(),
            seed: None,
            end_time_secs: None,
        }
    }
}

impl CanteenConfig {
    /// Number of trays (jobs) the run will create.
    pub fn total_jobs(&self) -> usize {
        self.table_count.saturating_mul(self.people_per_table)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_count == 0 {
            return Err(ConfigError::NoTables);
        }
        if self.people_per_table == 0 {
            return Err(ConfigError::NoPeoplePerTable);
        }
        if self.worker_count == 0 {
            return Err(ConfigError::NoWorkers);
        }
        self.table_count
            .checked_mul(self.people_per_table)
            .and_then(|jobs| jobs.checked_mul(RECORDS_PER_JOB))
            .ok_or(ConfigError::TooManyJobs {
                tables: self.table_count,
                per_table: self.people_per_table,
            })?;
        self.stage_durations.validate()?;
        if let Some(end) = self.end_time_secs {
            if !end.is_finite() || end < 0.0 {
                return Err(ConfigError::InvalidEndTime(end));
            }
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tables(mut self, table_count: usize, people_per_table: usize) -> Self {
        self.table_count = table_count;
        self.people_per_table = people_per_table;
        self
    }

    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_stage_durations(mut self, stage_durations: StageDurations) -> Self {
        self.stage_durations = stage_durations;
        self
    }

    pub fn with_lauk_secs(mut self, min_secs: f64, max_secs: f64) -> Self {
        self.stage_durations.lauk = DurationRange::new(min_secs, max_secs);
        self
    }

    pub fn with_angkat_secs(mut self, min_secs: f64, max_secs: f64) -> Self {
        self.stage_durations.angkat = DurationRange::new(min_secs, max_secs);
        self
    }

    pub fn with_nasi_secs(mut self, min_secs: f64, max_secs: f64) -> Self {
        self.stage_durations.nasi = DurationRange::new(min_secs, max_secs);
        self
    }

    /// Stop the run before the first event at or after `end_secs`.
    pub fn with_end_time_secs(mut self, end_secs: f64) -> Self {
        self.end_time_secs = Some(end_secs);
        self
    }
}
