#![allow(dead_code)]

use bevy_ecs::prelude::{Entity, World};
use kantin_core::durations::{FixedDurations, StageDurationSampler};
use kantin_core::ecs::Job;
use kantin_core::event_log::EventLog;
use kantin_core::pool::WorkerPool;
use kantin_core::scenario::{build_scenario, build_scenario_with_sampler, CanteenConfig};

/// A built scenario plus the job entities in creation order.
pub struct TestWorld {
    pub world: World,
    pub jobs: Vec<Entity>,
}

impl TestWorld {
    /// Build with the seeded uniform duration source.
    pub fn seeded(config: &CanteenConfig) -> Self {
        let mut world = World::new();
        let jobs = build_scenario(&mut world, config).expect("valid test config");
        Self { world, jobs }
    }

    /// Build with range midpoints as service times.
    pub fn fixed(config: &CanteenConfig) -> Self {
        Self::with_sampler(config, FixedDurations::midpoint())
    }

    pub fn with_sampler(config: &CanteenConfig, sampler: impl StageDurationSampler + 'static) -> Self {
        let mut world = World::new();
        let jobs = build_scenario_with_sampler(&mut world, config, sampler)
            .expect("valid test config");
        Self { world, jobs }
    }

    pub fn job(&self, index: usize) -> &Job {
        self.world
            .get::<Job>(self.jobs[index])
            .expect("job entity should exist")
    }

    pub fn log(&self) -> &EventLog {
        self.world.resource::<EventLog>()
    }

    pub fn pool(&self) -> &WorkerPool {
        self.world.resource::<WorkerPool>()
    }
}
