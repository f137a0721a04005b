//! End-to-end composition: hits -> zones -> scenario.

use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{AnalysisReport, InputDescriptor, TimingBreakdown};
use crate::error::AnalysisError;
use crate::scenario::ScenarioMatcher;
use crate::types::ImageSize;
use crate::zones::ZoneClassifier;
use log::debug;
use nalgebra::Point2;
use rayon::prelude::*;
use std::time::Instant;

/// Detector output for one photograph.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisJob {
    pub size: ImageSize,
    /// Hit positions in image pixels.
    pub points: Vec<Point2<f64>>,
}

impl AnalysisJob {
    pub fn new(size: ImageSize, points: Vec<Point2<f64>>) -> Self {
        Self { size, points }
    }
}

/// Stateless pipeline; safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct ShotAnalyzer {
    classifier: ZoneClassifier,
    matcher: ScenarioMatcher,
}

impl ShotAnalyzer {
    pub fn new(classifier: ZoneClassifier, matcher: ScenarioMatcher) -> Self {
        Self {
            classifier,
            matcher,
        }
    }

    pub fn classifier(&self) -> &ZoneClassifier {
        &self.classifier
    }

    pub fn matcher(&self) -> &ScenarioMatcher {
        &self.matcher
    }

    pub fn analyze(
        &self,
        points: &[Point2<f64>],
        size: ImageSize,
    ) -> Result<AnalysisReport, AnalysisError> {
        let t0 = Instant::now();
        let mut timings = TimingBreakdown::default();

        let hits = timings.time("classify", || self.classifier.label_hits(points, size))?;
        let zones: Vec<_> = hits.iter().map(|h| h.zone).collect();
        let labels: Vec<&str> = zones.iter().map(|z| z.label()).collect();
        let outcome = timings.time("match", || self.matcher.match_zones(labels.as_slice()));
        timings.total_ms = elapsed_ms(t0);

        debug!(
            "ShotAnalyzer::analyze {}x{} hits={} zones={:?} scenario={:?} total_ms={:.3}",
            size.width,
            size.height,
            hits.len(),
            labels,
            outcome.as_ref().map(|o| o.id.as_str()),
            timings.total_ms
        );

        Ok(AnalysisReport {
            input: InputDescriptor {
                width: size.width,
                height: size.height,
                hit_count: hits.len(),
                center_radius_px: self.classifier.center_radius_px(size),
            },
            hits,
            zones,
            outcome,
            timings,
        })
    }

    /// Analyzes independent jobs in parallel; results keep job order.
    pub fn analyze_batch(
        &self,
        jobs: &[AnalysisJob],
    ) -> Vec<Result<AnalysisReport, AnalysisError>> {
        jobs.par_iter()
            .map(|job| self.analyze(&job.points, job.size))
            .collect()
    }
}
