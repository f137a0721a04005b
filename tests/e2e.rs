mod common;

use common::synthetic_hits::{center_hits, cluster, polar_hit};
use nalgebra::Point2;
use shot_diagnosis::prelude::*;
use shot_diagnosis::{AnalysisJob, ScenarioCatalogue, ScenarioMatcher};

const W: u32 = 1200;
const H: u32 = 900;

fn analyze(points: &[Point2<f64>]) -> shot_diagnosis::AnalysisReport {
    let _ = env_logger::builder().is_test(true).try_init();
    ShotAnalyzer::default()
        .analyze(points, ImageSize::new(W, H))
        .expect("valid geometry")
}

#[test]
fn upper_right_group_is_diagnosed_as_sector_six() {
    let mut points = cluster(W, H, 300.0, 45.0, 3);
    points.extend(center_hits(W, H, 1));
    let report = analyze(&points);
    assert_eq!(report.zone_labels(), ["6", "6", "6", "1"]);
    assert_eq!(report.scenario_id(), "6");
    let expected = ScenarioCatalogue::builtin().get("6").cloned().unwrap();
    assert_eq!(report.message(), expected.description);
    assert_eq!(report.link(), expected.link.as_deref());
}

#[test]
fn three_center_hits_are_a_tight_group() {
    let mut points = center_hits(W, H, 3);
    points.push(polar_hit(W, H, 300.0, 180.0));
    let report = analyze(&points);
    assert_eq!(report.zone_labels(), ["1", "1", "1", "3"]);
    assert_eq!(report.scenario_id(), "1");
    assert_eq!(report.link(), None);
}

#[test]
fn lower_left_hits_are_not_lost_to_the_bottom_sector() {
    let report = analyze(&cluster(W, H, 350.0, 225.0, 4));
    assert_eq!(report.zone_labels(), ["2", "2", "2", "2"]);
    assert_eq!(report.scenario_id(), "2");
}

#[test]
fn spread_series_is_scattered() {
    let points = [
        polar_hit(W, H, 300.0, 180.0),
        polar_hit(W, H, 300.0, 90.0),
        polar_hit(W, H, 300.0, 0.0),
        polar_hit(W, H, 300.0, 225.0),
    ];
    let report = analyze(&points);
    assert_eq!(report.zone_labels(), ["3", "5", "7", "2"]);
    assert_eq!(report.scenario_id(), "13");
}

#[test]
fn empty_detection_is_all_missed_and_single_is_ten() {
    assert_eq!(analyze(&[]).scenario_id(), "12");
    assert_eq!(analyze(&[polar_hit(W, H, 250.0, 135.0)]).scenario_id(), "10");
}

#[test]
fn batch_analysis_matches_sequential_runs() {
    let analyzer = ShotAnalyzer::new(
        ZoneClassifier::default(),
        ScenarioMatcher::new(ScenarioCatalogue::builtin()),
    );
    let size = ImageSize::new(W, H);
    let jobs: Vec<AnalysisJob> = (0..24)
        .map(|i| {
            let angle = 15.0 * f64::from(i);
            AnalysisJob::new(size, cluster(W, H, 320.0, angle, (i % 4 + 1) as usize))
        })
        .collect();
    let batch = analyzer.analyze_batch(&jobs);
    for (job, result) in jobs.iter().zip(batch) {
        let parallel = result.unwrap();
        let sequential = analyzer.analyze(&job.points, job.size).unwrap();
        assert_eq!(parallel.zones, sequential.zones);
        assert_eq!(parallel.outcome, sequential.outcome);
    }
}
