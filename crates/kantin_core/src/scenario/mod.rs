//! Scenario setup: validate the canteen configuration, insert the engine
//! resources and create every tray (job) before the run starts.

mod build;
mod params;

pub use build::{build_scenario, build_scenario_with_sampler, job_id, RECORDS_PER_JOB};
pub use params::{CanteenConfig, SimulationEndTime};
