//! Discrete-event simulation of a canteen serving line: a fixed population of
//! trays (jobs) passes through three worker-served stages, sharing one FIFO
//! worker pool, and the run produces an ordered event log.

pub mod clock;
pub mod durations;
pub mod ecs;
pub mod error;
pub mod event_export;
pub mod event_log;
pub mod pool;
pub mod runner;
pub mod scenario;
pub mod systems;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::{ConfigError, SchedulingError, SimError};
pub use event_log::{EventRecord, StageLabel};
pub use runner::{simulate, simulate_with_sampler};
pub use scenario::CanteenConfig;
