use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::durations::{DurationSource, StageDurations};
use crate::ecs::Job;
use crate::error::SimError;
use crate::systems::process::{start_service, unexpected_stage};

/// A queued job was handed a worker by a release: begin its service.
pub fn resource_granted_system(
    event: Res<CurrentEvent>,
    mut clock: ResMut<SimulationClock>,
    mut durations: ResMut<DurationSource>,
    ranges: Res<StageDurations>,
    mut jobs: Query<&mut Job>,
) -> Result<(), SimError> {
    let entity = event.0.job;
    let mut job = jobs
        .get_mut(entity)
        .map_err(|_| SimError::UnknownJob(entity))?;
    let stage = match job.stage.service_stage() {
        Some(stage) if job.stage.is_waiting() => stage,
        _ => return Err(unexpected_stage(&job, EventKind::ResourceGranted)),
    };

    debug!(job = %job.id, %stage, at = clock.now(), "queued job resumed with a worker");
    start_service(entity, &mut job, stage, &mut clock, &mut durations, &ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Entity, World};
    use bevy_ecs::system::RunSystemOnce;

    use crate::durations::FixedDurations;
    use crate::ecs::Stage;

    fn grant(world: &mut World, entity: Entity) -> Result<(), SimError> {
        let event = world
            .resource_mut::<SimulationClock>()
            .schedule_in(0.0, EventKind::ResourceGranted, entity)
            .expect("schedule");
        world.resource_mut::<SimulationClock>().pop_next();
        world.insert_resource(CurrentEvent(event));
        world.run_system_once(resource_granted_system)
    }

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(SimulationClock::default());
        world.insert_resource(StageDurations::fixed(30.0, 20.0, 30.0));
        world.insert_resource(DurationSource::new(FixedDurations::midpoint()));
        world
    }

    #[test]
    fn waiting_job_enters_active_stage() {
        let mut world = world();
        let mut job = Job::new("Ompreng-2", 0.0);
        job.stage = Stage::WaitingAngkat;
        let entity = world.spawn(job).id();

        grant(&mut world, entity).expect("step");

        assert_eq!(world.get::<Job>(entity).expect("job").stage, Stage::Angkat);
        let next = world
            .resource_mut::<SimulationClock>()
            .pop_next()
            .expect("service end");
        assert_eq!(next.kind, EventKind::StageElapsed);
        assert_eq!(next.timestamp, 20.0);
    }

    #[test]
    fn grant_for_active_job_is_rejected() {
        let mut world = world();
        let mut job = Job::new("Ompreng-1", 0.0);
        job.stage = Stage::Lauk;
        let entity = world.spawn(job).id();

        let err = grant(&mut world, entity).expect_err("not waiting");
        assert_eq!(
            err,
            SimError::UnexpectedStage {
                job_id: "Ompreng-1".to_string(),
                stage: Stage::Lauk,
                event: EventKind::ResourceGranted,
            }
        );
    }

    #[test]
    fn grant_for_missing_job_is_rejected() {
        let mut world = world();
        let entity = world.spawn_empty().id();
        world.despawn(entity);

        assert_eq!(grant(&mut world, entity), Err(SimError::UnknownJob(entity)));
    }
}
