use bevy_ecs::prelude::{Entity, World};
use tracing::info;

use crate::clock::{EventKind, SimulationClock};
use crate::durations::{DurationSource, StageDurationSampler, UniformDurations};
use crate::ecs::Job;
use crate::error::SimError;
use crate::event_log::EventLog;
use crate::pool::WorkerPool;
use crate::runner::RunFault;
use crate::scenario::params::{CanteenConfig, SimulationEndTime};

/// Records per job: "Started", three stage completions, "AllStagesComplete".
pub const RECORDS_PER_JOB: usize = 5;

/// Identifier of the job created at zero-based `index`.
pub fn job_id(index: usize) -> String {
    format!("Ompreng-{}", index + 1)
}

/// Build a canteen scenario with uniform service times seeded from `config.seed`.
pub fn build_scenario(world: &mut World, config: &CanteenConfig) -> Result<Vec<Entity>, SimError> {
    let seed = config.seed.unwrap_or(0);
    build_scenario_with_sampler(world, config, UniformDurations::seeded(seed))
}

/// Build a canteen scenario with an injected duration sampler.
///
/// Validates `config`, inserts the clock, worker pool, event log and duration
/// resources, then spawns every job and schedules its start at time 0 in
/// creation order. Returns the job entities in that order.
pub fn build_scenario_with_sampler(
    world: &mut World,
    config: &CanteenConfig,
    sampler: impl StageDurationSampler + 'static,
) -> Result<Vec<Entity>, SimError> {
    config.validate()?;

    let total_jobs = config.total_jobs();
    let mut clock = SimulationClock::default();

    world.insert_resource(WorkerPool::new(config.worker_count));
    world.insert_resource(EventLog::with_capacity(
        total_jobs.saturating_mul(RECORDS_PER_JOB),
    ));
    world.insert_resource(config.stage_durations);
    world.insert_resource(DurationSource::new(sampler));
    world.insert_resource(RunFault::default());
    match config.end_time_secs {
        Some(end) => {
            world.insert_resource(SimulationEndTime(end));
        }
        None => {
            world.remove_resource::<SimulationEndTime>();
        }
    }

    let mut jobs = Vec::with_capacity(total_jobs);
    for index in 0..total_jobs {
        let entity = world.spawn(Job::new(job_id(index), clock.now())).id();
        clock.schedule_at(0.0, EventKind::JobStarted, entity)?;
        jobs.push(entity);
    }
    world.insert_resource(clock);

    info!(
        jobs = total_jobs,
        workers = config.worker_count,
        seed = config.seed.unwrap_or(0),
        "canteen scenario built"
    );
    Ok(jobs)
}
