//! Shared pool of interchangeable workers (petugas) with a FIFO wait queue.
//!
//! A request is granted immediately while a unit is free. Otherwise the job
//! joins the tail of the queue. A release hands the unit straight to the head
//! waiter by scheduling its [EventKind::ResourceGranted] at the current time,
//! so `in_use` never drops below the number of committed holders.

use std::collections::VecDeque;

use bevy_ecs::prelude::{Entity, Resource};
use tracing::debug;

use crate::clock::{EventKind, SimulationClock};
use crate::error::SchedulingError;

/// Outcome of [WorkerPool::request].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// A worker was free; the caller holds it now.
    Immediate,
    /// The caller was queued at this zero-based position.
    Queued(usize),
}

#[derive(Debug, Resource)]
pub struct WorkerPool {
    capacity: usize,
    in_use: usize,
    waiters: VecDeque<Entity>,
    peak_in_use: usize,
    total_grants: u64,
}

impl WorkerPool {
    /// Create a pool with `capacity` workers. Capacity must be at least one;
    /// [crate::scenario::CanteenConfig::validate] rejects zero upfront.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "worker pool needs at least one worker");
        Self {
            capacity,
            in_use: 0,
            waiters: VecDeque::new(),
            peak_in_use: 0,
            total_grants: 0,
        }
    }

    pub fn request(&mut self, job: Entity) -> Grant {
        if self.in_use < self.capacity {
            self.acquire();
            debug!(?job, in_use = self.in_use, "worker granted immediately");
            Grant::Immediate
        } else {
            self.waiters.push_back(job);
            let position = self.waiters.len() - 1;
            debug!(?job, position, "all workers busy, job queued");
            Grant::Queued(position)
        }
    }

    /// Return one worker. If a job is waiting, the worker passes to it and its
    /// resumption is scheduled at the current time; that job is returned.
    pub fn release(
        &mut self,
        clock: &mut SimulationClock,
    ) -> Result<Option<Entity>, SchedulingError> {
        debug_assert!(self.in_use > 0, "release without a matching grant");
        self.in_use = self.in_use.saturating_sub(1);

        let Some(next) = self.waiters.pop_front() else {
            return Ok(None);
        };
        clock.schedule_in(0.0, EventKind::ResourceGranted, next)?;
        self.acquire();
        debug!(job = ?next, at = clock.now(), "worker handed to head waiter");
        Ok(Some(next))
    }

    fn acquire(&mut self) {
        self.in_use += 1;
        self.total_grants += 1;
        self.peak_in_use = self.peak_in_use.max(self.in_use);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_use(&self) -> usize {
        self.in_use
    }

    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    pub fn waiters(&self) -> impl Iterator<Item = Entity> + '_ {
        self.waiters.iter().copied()
    }

    /// Highest number of simultaneous holders seen so far.
    pub fn peak_in_use(&self) -> usize {
        self.peak_in_use
    }

    pub fn total_grants(&self) -> u64 {
        self.total_grants
    }
}
