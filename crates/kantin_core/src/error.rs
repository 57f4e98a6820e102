//! Error types for configuration, scheduling and process resumption.

use bevy_ecs::prelude::Entity;
use thiserror::Error;

use crate::clock::EventKind;
use crate::ecs::{ServiceStage, Stage};

/// Invalid canteen configuration, rejected before any simulated time advances.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("table count must be positive")]
    NoTables,

    #[error("people per table must be at least 1")]
    NoPeoplePerTable,

    #[error("worker count must be at least 1")]
    NoWorkers,

    #[error("{tables} tables × {per_table} people is too many trays to log")]
    TooManyJobs { tables: usize, per_table: usize },

    /// Range bounds must be finite with `0 <= min <= max`.
    #[error("invalid {stage} duration range [{min}, {max}]")]
    InvalidDurationRange {
        stage: ServiceStage,
        min: f64,
        max: f64,
    },

    #[error("end time must be finite and non-negative, got {0}")]
    InvalidEndTime(f64),
}

/// Rejected attempt to insert an event into the pending-event queue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulingError {
    #[error("delay must be finite and non-negative, got {delay}")]
    InvalidDelay { delay: f64 },

    #[error("cannot schedule at {at} s, clock is already at {now} s")]
    EventInPast { at: f64, now: f64 },

    #[error("delay of {delay} s from {now} s overflows the clock")]
    TimeOverflow { now: f64, delay: f64 },
}

/// Fatal error for a single simulation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scheduling(#[from] SchedulingError),

    #[error("event addressed to unknown job entity {0:?}")]
    UnknownJob(Entity),

    #[error("job {job_id} received {event:?} while in stage {stage:?}")]
    UnexpectedStage {
        job_id: String,
        stage: Stage,
        event: EventKind,
    },
}
