#![allow(dead_code)]

use bevy_ecs::prelude::World;
use bevy_ecs::schedule::Schedule;
use kantin_core::clock::Event;
use kantin_core::error::SimError;
use kantin_core::runner::{
    run_next_event, run_until_empty, run_until_empty_with_hook, simulation_schedule,
};

/// Helper that owns a reusable `Schedule` so tests can step or drain the event queue.
pub struct ScheduleRunner {
    schedule: Schedule,
}

impl Default for ScheduleRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleRunner {
    /// Create a runner with the default simulation schedule.
    pub fn new() -> Self {
        Self {
            schedule: simulation_schedule(),
        }
    }

    /// Run a single event (returns `true` if an event was processed).
    pub fn run_one(&mut self, world: &mut World) -> Result<bool, SimError> {
        run_next_event(world, &mut self.schedule)
    }

    /// Drive the simulation until the event queue is empty.
    pub fn run_full(&mut self, world: &mut World) -> Result<usize, SimError> {
        run_until_empty(world, &mut self.schedule, usize::MAX)
    }

    /// Drain the queue, calling `hook` after every processed event.
    pub fn run_full_with_hook<F>(&mut self, world: &mut World, hook: F) -> Result<usize, SimError>
    where
        F: FnMut(&World, &Event),
    {
        run_until_empty_with_hook(world, &mut self.schedule, usize::MAX, hook)
    }
}
