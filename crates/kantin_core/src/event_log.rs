//! Append-only log of stage-completion events, the engine's only output.

use std::fmt;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::ecs::ServiceStage;

/// Label of an [EventRecord], serialized with the dashboard's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StageLabel {
    #[serde(rename = "Started")]
    Started,
    #[serde(rename = "Lauk Selesai")]
    LaukSelesai,
    #[serde(rename = "Angkat Selesai")]
    AngkatSelesai,
    #[serde(rename = "Nasi Selesai")]
    NasiSelesai,
    #[serde(rename = "AllStagesComplete")]
    AllStagesComplete,
}

impl StageLabel {
    /// Labels in the order every job emits them.
    pub const ORDER: [StageLabel; 5] = [
        StageLabel::Started,
        StageLabel::LaukSelesai,
        StageLabel::AngkatSelesai,
        StageLabel::NasiSelesai,
        StageLabel::AllStagesComplete,
    ];

    pub fn completion_of(stage: ServiceStage) -> Self {
        match stage {
            ServiceStage::Lauk => StageLabel::LaukSelesai,
            ServiceStage::Angkat => StageLabel::AngkatSelesai,
            ServiceStage::Nasi => StageLabel::NasiSelesai,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StageLabel::Started => "Started",
            StageLabel::LaukSelesai => "Lauk Selesai",
            StageLabel::AngkatSelesai => "Angkat Selesai",
            StageLabel::NasiSelesai => "Nasi Selesai",
            StageLabel::AllStagesComplete => "AllStagesComplete",
        }
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub stage: StageLabel,
    /// Simulation time in seconds.
    pub time: f64,
    pub job_id: String,
}

#[derive(Debug, Default, Resource)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, stage: StageLabel, time: f64, job_id: &str) {
        self.records.push(EventRecord {
            stage,
            time,
            job_id: job_id.to_owned(),
        });
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Records of one job, in emission order.
    pub fn for_job<'a>(&'a self, job_id: &'a str) -> impl Iterator<Item = &'a EventRecord> + 'a {
        self.records.iter().filter(move |record| record.job_id == job_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<EventRecord> {
        self.records
    }
}
