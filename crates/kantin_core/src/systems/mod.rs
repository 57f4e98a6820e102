//! Job-process systems. Each one resumes a single job for the
//! [crate::clock::CurrentEvent] it is gated on.

pub mod job_started;
pub(crate) mod process;
pub mod resource_granted;
pub mod stage_elapsed;
