//! Simulation runner: advances the clock and routes events into the ECS.
//!
//! Clock progression and event routing happen here, outside systems. Each step
//! pops the next event from [SimulationClock], inserts it as [CurrentEvent],
//! then runs the schedule. A system that fails records a [RunFault]; the step
//! that produced it returns the error and the run stops.

use bevy_ecs::prelude::{In, Res, ResMut, Resource, Schedule, World};
use bevy_ecs::schedule::{ExecutorKind, IntoSystemConfigs};
use bevy_ecs::system::IntoSystem;
use tracing::{info, warn};

use crate::clock::{CurrentEvent, Event, EventKind, SimulationClock};
use crate::durations::StageDurationSampler;
use crate::error::SimError;
use crate::event_log::{EventLog, EventRecord};
use crate::scenario::{build_scenario, build_scenario_with_sampler, CanteenConfig, SimulationEndTime};
use crate::systems::{
    job_started::job_started_system, resource_granted::resource_granted_system,
    stage_elapsed::stage_elapsed_system,
};

/// First error raised by a job-process system during the current step.
#[derive(Debug, Default, Resource)]
pub struct RunFault(pub Option<SimError>);

/// Pipe target for job-process systems: keeps the first error of a step.
pub fn record_fault(In(result): In<Result<(), SimError>>, mut fault: ResMut<RunFault>) {
    if let Err(error) = result {
        warn!(%error, "job process step failed");
        fault.0.get_or_insert(error);
    }
}

fn is_job_started(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::JobStarted)
        .unwrap_or(false)
}

fn is_resource_granted(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ResourceGranted)
        .unwrap_or(false)
}

fn is_stage_elapsed(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::StageElapsed)
        .unwrap_or(false)
}

/// Runs one simulation step: pops the next event, inserts it as [CurrentEvent], then runs the schedule.
/// Returns `Ok(true)` if an event was processed, `Ok(false)` if the clock was empty or if the next event
/// is at or past [SimulationEndTime] (when that resource is present).
pub fn run_next_event(world: &mut World, schedule: &mut Schedule) -> Result<bool, SimError> {
    run_next_event_with_hook(world, schedule, |_, _| {})
}

/// Runs one simulation step and invokes `hook` after the schedule completes.
pub fn run_next_event_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    mut hook: F,
) -> Result<bool, SimError>
where
    F: FnMut(&World, &Event),
{
    let stop_at = world.get_resource::<SimulationEndTime>().map(|e| e.0);
    let next_ts = world
        .get_resource::<SimulationClock>()
        .and_then(|c| c.next_event_time());
    if let (Some(end), Some(ts)) = (stop_at, next_ts) {
        if ts >= end {
            return Ok(false);
        }
    }

    let event = match world
        .get_resource_mut::<SimulationClock>()
        .and_then(|mut clock| clock.pop_next())
    {
        Some(e) => e,
        None => return Ok(false),
    };
    world.insert_resource(CurrentEvent(event));
    world.get_resource_or_insert_with(RunFault::default);

    schedule.run(world);

    if let Some(error) = world.resource_mut::<RunFault>().0.take() {
        return Err(error);
    }
    hook(world, &event);
    Ok(true)
}

/// Runs simulation steps until the event queue is empty or `max_steps` is reached.
/// Returns the number of steps executed.
pub fn run_until_empty(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
) -> Result<usize, SimError> {
    run_until_empty_with_hook(world, schedule, max_steps, |_, _| {})
}

/// Runs simulation steps until empty and invokes `hook` after each step.
pub fn run_until_empty_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    max_steps: usize,
    mut hook: F,
) -> Result<usize, SimError>
where
    F: FnMut(&World, &Event),
{
    let mut steps = 0;
    while steps < max_steps && run_next_event_with_hook(world, schedule, &mut hook)? {
        steps += 1;
    }
    Ok(steps)
}

/// Builds the job-process schedule. Exactly one system runs per event,
/// selected by the event kind, on a single-threaded executor.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    schedule.add_systems((
        // JobStarted
        job_started_system.pipe(record_fault).run_if(is_job_started),
        // ResourceGranted
        resource_granted_system
            .pipe(record_fault)
            .run_if(is_resource_granted),
        // StageElapsed
        stage_elapsed_system.pipe(record_fault).run_if(is_stage_elapsed),
    ));

    schedule
}

/// Run a full canteen simulation with uniform service times and return the event log.
pub fn simulate(config: &CanteenConfig) -> Result<Vec<EventRecord>, SimError> {
    let mut world = World::new();
    build_scenario(&mut world, config)?;
    drain(world)
}

/// Run a full canteen simulation with an injected duration sampler.
pub fn simulate_with_sampler(
    config: &CanteenConfig,
    sampler: impl StageDurationSampler + 'static,
) -> Result<Vec<EventRecord>, SimError> {
    let mut world = World::new();
    build_scenario_with_sampler(&mut world, config, sampler)?;
    drain(world)
}

fn drain(mut world: World) -> Result<Vec<EventRecord>, SimError> {
    let mut schedule = simulation_schedule();
    let steps = run_until_empty(&mut world, &mut schedule, usize::MAX)?;

    let end_time = world.resource::<SimulationClock>().now();
    let log = world
        .remove_resource::<EventLog>()
        .unwrap_or_default();
    info!(steps, end_time, records = log.len(), "simulation finished");
    Ok(log.into_records())
}
