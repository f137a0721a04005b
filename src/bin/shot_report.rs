use log::info;
use serde::Serialize;
use shot_diagnosis::analyzer::{AnalysisJob, ShotAnalyzer};
use shot_diagnosis::config::report::{self, OutputFormat, ReportConfig};
use shot_diagnosis::diagnostics::AnalysisReport;
use shot_diagnosis::io::write_json_file;
use shot_diagnosis::scenario::{load_catalogue, ScenarioCatalogue, ScenarioMatcher};
use shot_diagnosis::zones::ZoneClassifier;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: shot_report <config.json>".to_string()
}

#[derive(Serialize)]
struct NamedReport<'a> {
    name: String,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = report::load_config(Path::new(&config_path))?;

    let analyzer = build_analyzer(&config)?;
    let names: Vec<String> = config
        .inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| input.display_name(idx))
        .collect();
    let jobs = config
        .inputs
        .iter()
        .zip(&names)
        .map(|(input, name)| {
            let size = input.resolve_size().map_err(|e| format!("{name}: {e}"))?;
            let points = input.resolve_hits(size).map_err(|e| format!("{name}: {e}"))?;
            Ok(AnalysisJob::new(size, points))
        })
        .collect::<Result<Vec<_>, String>>()?;

    info!("analyzing {} input(s)", jobs.len());
    let reports = analyzer
        .analyze_batch(&jobs)
        .into_iter()
        .zip(&names)
        .map(|(res, name)| res.map_err(|e| format!("{name}: {e}")))
        .collect::<Result<Vec<_>, String>>()?;

    let format = config.output.format;
    if format.includes_text() {
        for (name, report) in names.iter().zip(&reports) {
            print_text_summary(name, report);
        }
    }

    if format.includes_json() {
        let named: Vec<NamedReport<'_>> = names
            .iter()
            .zip(&reports)
            .map(|(name, report)| NamedReport {
                name: name.clone(),
                report,
            })
            .collect();
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &named)?;
            if format.includes_text() {
                println!("\nJSON report written to {}", path.display());
            } else {
                println!("JSON report written to {}", path.display());
            }
        } else {
            let json = serde_json::to_string_pretty(&named)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    Ok(())
}

fn build_analyzer(config: &ReportConfig) -> Result<ShotAnalyzer, String> {
    let classifier = ZoneClassifier::new(config.zone_params).map_err(|e| e.to_string())?;
    let catalogue = match &config.catalogue {
        Some(path) => load_catalogue(path).map_err(|e| e.to_string())?,
        None => ScenarioCatalogue::builtin(),
    };
    Ok(ShotAnalyzer::new(classifier, ScenarioMatcher::new(catalogue)))
}

fn print_text_summary(name: &str, report: &AnalysisReport) {
    println!("{name}");
    println!(
        "  image: {}x{} center_radius_px={:.1}",
        report.input.width, report.input.height, report.input.center_radius_px
    );
    println!("  hits: {}", report.hits.len());
    for (idx, hit) in report.hits.iter().enumerate() {
        println!(
            "    #{}: ({:.1}, {:.1}) zone={}",
            idx + 1,
            hit.position.x,
            hit.position.y,
            hit.zone
        );
    }
    println!("  scenario: {}", report.scenario_id());
    println!("  message: {}", report.message());
    println!("  link: {}", report.link().unwrap_or("-"));
    println!("  total_ms: {:.3}", report.timings.total_ms);
}
