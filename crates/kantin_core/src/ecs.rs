use std::fmt;

use bevy_ecs::prelude::Component;

/// Lifecycle stage of one job (an ompreng tray). Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Created,
    WaitingLauk,
    Lauk,
    WaitingAngkat,
    Angkat,
    WaitingNasi,
    Nasi,
    Done,
}

impl Stage {
    /// The service stage this stage waits for or performs, if any.
    pub fn service_stage(self) -> Option<ServiceStage> {
        match self {
            Stage::WaitingLauk | Stage::Lauk => Some(ServiceStage::Lauk),
            Stage::WaitingAngkat | Stage::Angkat => Some(ServiceStage::Angkat),
            Stage::WaitingNasi | Stage::Nasi => Some(ServiceStage::Nasi),
            Stage::Created | Stage::Done => None,
        }
    }

    pub fn is_waiting(self) -> bool {
        matches!(
            self,
            Stage::WaitingLauk | Stage::WaitingAngkat | Stage::WaitingNasi
        )
    }

    /// True while the job holds a worker.
    pub fn is_active(self) -> bool {
        matches!(self, Stage::Lauk | Stage::Angkat | Stage::Nasi)
    }
}

/// One of the three worker-served steps, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceStage {
    /// Putting the side dish on the tray.
    Lauk,
    /// Carrying the tray.
    Angkat,
    /// Adding rice.
    Nasi,
}

impl ServiceStage {
    pub const ALL: [ServiceStage; 3] = [ServiceStage::Lauk, ServiceStage::Angkat, ServiceStage::Nasi];

    pub fn waiting(self) -> Stage {
        match self {
            ServiceStage::Lauk => Stage::WaitingLauk,
            ServiceStage::Angkat => Stage::WaitingAngkat,
            ServiceStage::Nasi => Stage::WaitingNasi,
        }
    }

    pub fn active(self) -> Stage {
        match self {
            ServiceStage::Lauk => Stage::Lauk,
            ServiceStage::Angkat => Stage::Angkat,
            ServiceStage::Nasi => Stage::Nasi,
        }
    }

    /// The stage that follows this one, or `None` after rice.
    pub fn next(self) -> Option<ServiceStage> {
        match self {
            ServiceStage::Lauk => Some(ServiceStage::Angkat),
            ServiceStage::Angkat => Some(ServiceStage::Nasi),
            ServiceStage::Nasi => None,
        }
    }
}

impl fmt::Display for ServiceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServiceStage::Lauk => "lauk",
            ServiceStage::Angkat => "angkat",
            ServiceStage::Nasi => "nasi",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Component)]
pub struct Job {
    pub id: String,
    pub stage: Stage,
    /// Simulation time (seconds) when the job was created.
    pub created_at: f64,
}

impl Job {
    pub fn new(id: impl Into<String>, created_at: f64) -> Self {
        Self {
            id: id.into(),
            stage: Stage::Created,
            created_at,
        }
    }
}
