//! Serializable report of one analysis pass.
//!
//! `AnalysisReport` bundles the classified hits, the zone labels handed to
//! the matcher, the selected scenario (if any) and per-stage timings.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::scenario::{Diagnosis, ScenarioOutcome};
use crate::zones::{Hit, Zone};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: u32,
    pub height: u32,
    pub hit_count: usize,
    pub center_radius_px: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub input: InputDescriptor,
    pub hits: Vec<Hit>,
    pub zones: Vec<Zone>,
    pub outcome: Option<ScenarioOutcome>,
    pub timings: TimingBreakdown,
}

impl AnalysisReport {
    pub fn zone_labels(&self) -> Vec<&'static str> {
        self.zones.iter().map(|z| z.label()).collect()
    }

    /// Scenario id, or `"-"` when nothing matched.
    pub fn scenario_id(&self) -> &str {
        self.outcome.as_ref().map_or("-", |o| o.id.as_str())
    }

    pub fn message(&self) -> &str {
        self.outcome.message()
    }

    pub fn link(&self) -> Option<&str> {
        self.outcome.link()
    }
}
