//! Service-time sources for the three canteen stages.
//!
//! The engine never draws randomness on its own; it asks the
//! [DurationSource] resource, so a run is reproducible from its seed and a
//! test can inject fixed durations.

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::ecs::ServiceStage;
use crate::error::ConfigError;

/// Closed range of service durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationRange {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl DurationRange {
    pub const fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }

    /// A range that always yields `secs`.
    pub const fn fixed(secs: f64) -> Self {
        Self::new(secs, secs)
    }

    pub fn validate(&self, stage: ServiceStage) -> Result<(), ConfigError> {
        let valid = self.min_secs.is_finite()
            && self.max_secs.is_finite()
            && self.min_secs >= 0.0
            && self.max_secs >= self.min_secs;
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidDurationRange {
                stage,
                min: self.min_secs,
                max: self.max_secs,
            })
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_secs + self.max_secs) / 2.0
    }
}

/// Per-stage duration ranges.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct StageDurations {
    pub lauk: DurationRange,
    pub angkat: DurationRange,
    pub nasi: DurationRange,
}

impl Default for StageDurations {
    fn default() -> Self {
        Self {
            lauk: DurationRange::new(30.0, 60.0),
            angkat: DurationRange::new(20.0, 60.0),
            nasi: DurationRange::new(30.0, 60.0),
        }
    }
}

impl StageDurations {
    /// Every stage takes exactly the given number of seconds.
    pub fn fixed(lauk: f64, angkat: f64, nasi: f64) -> Self {
        Self {
            lauk: DurationRange::fixed(lauk),
            angkat: DurationRange::fixed(angkat),
            nasi: DurationRange::fixed(nasi),
        }
    }

    pub fn range(&self, stage: ServiceStage) -> DurationRange {
        match stage {
            ServiceStage::Lauk => self.lauk,
            ServiceStage::Angkat => self.angkat,
            ServiceStage::Nasi => self.nasi,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ServiceStage::ALL
            .iter()
            .try_for_each(|stage| self.range(*stage).validate(*stage))
    }
}

/// Trait for sampling stage service durations (in seconds).
pub trait StageDurationSampler: Send + Sync + std::fmt::Debug {
    /// Sample the service time for `stage` from `range`.
    fn sample_secs(&mut self, stage: ServiceStage, range: DurationRange) -> f64;
}

/// Uniform service times drawn from a seeded RNG.
#[derive(Debug, Clone)]
pub struct UniformDurations {
    rng: StdRng,
}

impl UniformDurations {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl StageDurationSampler for UniformDurations {
    fn sample_secs(&mut self, _stage: ServiceStage, range: DurationRange) -> f64 {
        // Degenerate ranges return the bound without consuming randomness.
        if range.max_secs <= range.min_secs {
            return range.min_secs;
        }
        self.rng.gen_range(range.min_secs..range.max_secs)
    }
}

/// Deterministic service times: the range midpoint, or one constant per stage.
#[derive(Debug, Clone, Default)]
pub struct FixedDurations {
    overrides: Option<[f64; 3]>,
}

impl FixedDurations {
    /// Always sample the midpoint of the configured range.
    pub fn midpoint() -> Self {
        Self::default()
    }

    /// Ignore configured ranges and use these durations.
    pub fn per_stage(lauk: f64, angkat: f64, nasi: f64) -> Self {
        Self {
            overrides: Some([lauk, angkat, nasi]),
        }
    }
}

impl StageDurationSampler for FixedDurations {
    fn sample_secs(&mut self, stage: ServiceStage, range: DurationRange) -> f64 {
        match self.overrides {
            Some(values) => values[stage as usize],
            None => range.midpoint(),
        }
    }
}

/// The injectable duration source used by the job-process systems.
#[derive(Debug, Resource)]
pub struct DurationSource(pub Box<dyn StageDurationSampler>);

impl DurationSource {
    pub fn new(sampler: impl StageDurationSampler + 'static) -> Self {
        Self(Box::new(sampler))
    }

    pub fn sample_secs(&mut self, stage: ServiceStage, range: DurationRange) -> f64 {
        self.0.sample_secs(stage, range)
    }
}
