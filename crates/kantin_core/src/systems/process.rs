//! Steps shared by the job-process systems: queue for a worker, then start
//! the timed service once a worker is held.

use bevy_ecs::prelude::Entity;
use tracing::debug;

use crate::clock::{EventKind, SimulationClock};
use crate::durations::{DurationSource, StageDurations};
use crate::ecs::{Job, ServiceStage};
use crate::error::SimError;
use crate::pool::{Grant, WorkerPool};

/// Move `job` to the waiting state of `stage` and request a worker. An
/// immediate grant starts the service in the same step.
pub(crate) fn request_stage(
    entity: Entity,
    job: &mut Job,
    stage: ServiceStage,
    clock: &mut SimulationClock,
    pool: &mut WorkerPool,
    durations: &mut DurationSource,
    ranges: &StageDurations,
) -> Result<(), SimError> {
    job.stage = stage.waiting();
    match pool.request(entity) {
        Grant::Immediate => start_service(entity, job, stage, clock, durations, ranges),
        Grant::Queued(_) => Ok(()),
    }
}

/// The job holds a worker: sample the service time and schedule its end.
pub(crate) fn start_service(
    entity: Entity,
    job: &mut Job,
    stage: ServiceStage,
    clock: &mut SimulationClock,
    durations: &mut DurationSource,
    ranges: &StageDurations,
) -> Result<(), SimError> {
    job.stage = stage.active();
    let service_secs = durations.sample_secs(stage, ranges.range(stage));
    let event = clock.schedule_in(service_secs, EventKind::StageElapsed, entity)?;
    debug!(
        job = %job.id,
        %stage,
        start = clock.now(),
        end = event.timestamp,
        "service started"
    );
    Ok(())
}

pub(crate) fn unexpected_stage(job: &Job, event: EventKind) -> SimError {
    SimError::UnexpectedStage {
        job_id: job.id.clone(),
        stage: job.stage,
        event,
    }
}
