//! Simulation clock: simulated time plus the pending-event queue.
//!
//! Time is measured in seconds as `f64`. Events fire in `(timestamp, seq)`
//! order, where `seq` is assigned on insertion, so two events scheduled for
//! the same instant fire in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bevy_ecs::prelude::{Entity, Resource};
use tracing::trace;

use crate::error::SchedulingError;

/// Continuation kinds a job process can be resumed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The job process begins: emits "Started" and requests its first stage.
    JobStarted,
    /// A worker was handed over to a queued job by a release.
    ResourceGranted,
    /// The service duration of the job's active stage has elapsed.
    StageElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub timestamp: f64,
    pub seq: u64,
    pub kind: EventKind,
    pub job: Entity,
}

impl Eq for Event {}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap a min-heap by (timestamp, seq).
        other
            .timestamp
            .total_cmp(&self.timestamp)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The event being processed in the current runner step.
#[derive(Debug, Clone, Copy, Resource)]
pub struct CurrentEvent(pub Event);

#[derive(Debug, Default, Resource)]
pub struct SimulationClock {
    now: f64,
    next_seq: u64,
    events: BinaryHeap<Event>,
}

impl SimulationClock {
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Schedule `kind` for `job` to fire `delay` seconds from now.
    pub fn schedule_in(
        &mut self,
        delay: f64,
        kind: EventKind,
        job: Entity,
    ) -> Result<Event, SchedulingError> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(SchedulingError::InvalidDelay { delay });
        }
        let at = self.now + delay;
        if !at.is_finite() {
            return Err(SchedulingError::TimeOverflow {
                now: self.now,
                delay,
            });
        }
        Ok(self.push(at, kind, job))
    }

    /// Schedule `kind` for `job` at an absolute time, which must not lie in the past.
    pub fn schedule_at(
        &mut self,
        timestamp: f64,
        kind: EventKind,
        job: Entity,
    ) -> Result<Event, SchedulingError> {
        if !timestamp.is_finite() || timestamp < self.now {
            return Err(SchedulingError::EventInPast {
                at: timestamp,
                now: self.now,
            });
        }
        Ok(self.push(timestamp, kind, job))
    }

    fn push(&mut self, timestamp: f64, kind: EventKind, job: Entity) -> Event {
        let event = Event {
            timestamp,
            seq: self.next_seq,
            kind,
            job,
        };
        self.next_seq += 1;
        trace!(at = timestamp, seq = event.seq, ?kind, ?job, "scheduled event");
        self.events.push(event);
        event
    }

    /// Pop the earliest event and advance `now` to its timestamp.
    pub fn pop_next(&mut self) -> Option<Event> {
        let event = self.events.pop()?;
        self.now = event.timestamp;
        Some(event)
    }

    pub fn next_event_time(&self) -> Option<f64> {
        self.events.peek().map(|event| event.timestamp)
    }

    pub fn pending(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
