#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod scenario;
pub mod types;
pub mod zones;

// Tool-facing helpers.
pub mod angle;
pub mod config;
pub mod detections;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{AnalysisJob, ShotAnalyzer};
pub use crate::diagnostics::AnalysisReport;
pub use crate::error::{AnalysisError, CatalogueError, DetectionError};
pub use crate::scenario::{match_zones, ScenarioCatalogue, ScenarioMatcher, ScenarioOutcome};
pub use crate::types::{ImageFrame, ImageSize};
pub use crate::zones::{classify_hits, classify_target_points, Zone, ZoneClassifier, ZoneParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for the common hits -> scenario flow.
///
/// ```
/// use shot_diagnosis::prelude::*;
/// use nalgebra::Point2;
///
/// let analyzer = ShotAnalyzer::default();
/// let hits = [Point2::new(320.0, 240.0), Point2::new(322.0, 238.0), Point2::new(318.0, 241.0)];
/// let report = analyzer.analyze(&hits, ImageSize::new(640, 480)).unwrap();
/// assert_eq!(report.scenario_id(), "1");
/// println!("{}", report.message());
/// ```
pub mod prelude {
    pub use crate::scenario::Diagnosis;
    pub use crate::{ImageSize, ShotAnalyzer, Zone, ZoneClassifier};
}
