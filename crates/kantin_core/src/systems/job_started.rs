use bevy_ecs::prelude::{Query, Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::durations::{DurationSource, StageDurations};
use crate::ecs::{Job, ServiceStage, Stage};
use crate::error::SimError;
use crate::event_log::{EventLog, StageLabel};
use crate::pool::WorkerPool;
use crate::systems::process::{request_stage, unexpected_stage};

/// A job process begins: log "Started" and queue for the lauk stage.
pub fn job_started_system(
    event: Res<CurrentEvent>,
    mut clock: ResMut<SimulationClock>,
    mut pool: ResMut<WorkerPool>,
    mut durations: ResMut<DurationSource>,
    ranges: Res<StageDurations>,
    mut log: ResMut<EventLog>,
    mut jobs: Query<&mut Job>,
) -> Result<(), SimError> {
    let entity = event.0.job;
    let mut job = jobs
        .get_mut(entity)
        .map_err(|_| SimError::UnknownJob(entity))?;
    if job.stage != Stage::Created {
        return Err(unexpected_stage(&job, EventKind::JobStarted));
    }

    log.record(StageLabel::Started, clock.now(), &job.id);
    request_stage(
        entity,
        &mut job,
        ServiceStage::Lauk,
        &mut clock,
        &mut pool,
        &mut durations,
        &ranges,
    )
}
