use bevy_ecs::prelude::{Query, Res, ResMut};
use tracing::debug;

use crate::clock::{CurrentEvent, EventKind, SimulationClock};
use crate::durations::{DurationSource, StageDurations};
use crate::ecs::{Job, Stage};
use crate::error::SimError;
use crate::event_log::{EventLog, StageLabel};
use crate::pool::WorkerPool;
use crate::systems::process::{request_stage, unexpected_stage};

/// The active stage's service time is over: log the completion, release the
/// worker, then queue for the next stage or finish.
pub fn stage_elapsed_system(
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
    let stage = match job.stage.service_stage() {
        Some(stage) if job.stage.is_active() => stage,
        _ => return Err(unexpected_stage(&job, EventKind::StageElapsed)),
    };

    let now = clock.now();
    log.record(StageLabel::completion_of(stage), now, &job.id);
    debug!(job = %job.id, %stage, at = now, "stage complete");
    pool.release(&mut clock)?;

    match stage.next() {
        Some(next) => request_stage(
            entity,
            &mut job,
            next,
            &mut clock,
            &mut pool,
            &mut durations,
            &ranges,
        ),
        None => {
            job.stage = Stage::Done;
            log.record(StageLabel::AllStagesComplete, now, &job.id);
            debug!(job = %job.id, at = now, "all stages complete");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Entity, World};
    use bevy_ecs::system::RunSystemOnce;

    use crate::durations::FixedDurations;

    fn world(capacity: usize) -> World {
        let mut world = World::new();
        world.insert_resource(SimulationClock::default());
        world.insert_resource(WorkerPool::new(capacity));
        world.insert_resource(EventLog::default());
        world.insert_resource(StageDurations::fixed(30.0, 20.0, 30.0));
        world.insert_resource(DurationSource::new(FixedDurations::midpoint()));
        world
    }

    fn elapse(world: &mut World, entity: Entity, delay: f64) -> Result<(), SimError> {
        let event = world
            .resource_mut::<SimulationClock>()
            .schedule_in(delay, EventKind::StageElapsed, entity)
            .expect("schedule");
        world.resource_mut::<SimulationClock>().pop_next();
        world.insert_resource(CurrentEvent(event));
        world.run_system_once(stage_elapsed_system)
    }

    fn holding(world: &mut World, id: &str, stage: Stage) -> Entity {
        let mut job = Job::new(id, 0.0);
        job.stage = stage;
        let entity = world.spawn(job).id();
        world.resource_mut::<WorkerPool>().request(entity);
        entity
    }

    #[test]
    fn lauk_completion_moves_to_angkat() {
        let mut world = world(1);
        let entity = holding(&mut world, "Ompreng-1", Stage::Lauk);

        elapse(&mut world, entity, 30.0).expect("step");

        assert_eq!(world.get::<Job>(entity).expect("job").stage, Stage::Angkat);
        let log = world.resource::<EventLog>();
        assert_eq!(log.records()[0].stage, StageLabel::LaukSelesai);
        assert_eq!(log.records()[0].time, 30.0);
        assert_eq!(world.resource::<WorkerPool>().in_use(), 1);
    }

    #[test]
    fn nasi_completion_finishes_job() {
        let mut world = world(1);
        let entity = holding(&mut world, "Ompreng-1", Stage::Nasi);

        elapse(&mut world, entity, 80.0).expect("step");

        assert_eq!(world.get::<Job>(entity).expect("job").stage, Stage::Done);
        let stages: Vec<(StageLabel, f64)> = world
            .resource::<EventLog>()
            .records()
            .iter()
            .map(|r| (r.stage, r.time))
            .collect();
        assert_eq!(
            stages,
            vec![
                (StageLabel::NasiSelesai, 80.0),
                (StageLabel::AllStagesComplete, 80.0)
            ]
        );
        assert_eq!(world.resource::<WorkerPool>().in_use(), 0);
        assert!(world.resource::<SimulationClock>().is_empty());
    }

    #[test]
    fn release_hands_worker_to_waiter_before_requeueing() {
        let mut world = world(1);
        let first = holding(&mut world, "Ompreng-1", Stage::Lauk);
        let mut waiting = Job::new("Ompreng-2", 0.0);
        waiting.stage = Stage::WaitingLauk;
        let second = world.spawn(waiting).id();
        world.resource_mut::<WorkerPool>().request(second);

        elapse(&mut world, first, 30.0).expect("step");

        assert_eq!(
            world.get::<Job>(first).expect("job").stage,
            Stage::WaitingAngkat
        );
        let pool = world.resource::<WorkerPool>();
        assert_eq!(pool.in_use(), 1);
        assert_eq!(pool.waiters().collect::<Vec<_>>(), vec![first]);

        let handoff = world
            .resource_mut::<SimulationClock>()
            .pop_next()
            .expect("grant");
        assert_eq!(handoff.kind, EventKind::ResourceGranted);
        assert_eq!(handoff.job, second);
        assert_eq!(handoff.timestamp, 30.0);
    }
}
