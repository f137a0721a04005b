use crate::io::{read_hits, read_image_size, HitSource};
use crate::types::ImageSize;
use crate::zones::ZoneParams;
use nalgebra::Point2;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
    pub format: OutputFormat,
}

/// One photograph and its detector output.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Display name; defaults to the image path or the input index.
    pub name: Option<String>,
    /// Image whose header provides width/height.
    pub image: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// JSON array of `[x, y]` pixel pairs.
    pub hits_json: Option<PathBuf>,
    /// YOLO prediction text file.
    pub yolo_labels: Option<PathBuf>,
    /// Inline `[x, y]` pixel pairs.
    pub hits: Option<Vec<[f64; 2]>>,
}

impl InputConfig {
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .or_else(|| self.image.as_ref().map(|p| p.display().to_string()))
            .unwrap_or_else(|| format!("input #{index}"))
    }

    /// Explicit width/height win over the image header.
    pub fn resolve_size(&self) -> Result<ImageSize, String> {
        match (self.width, self.height, &self.image) {
            (Some(width), Some(height), _) => Ok(ImageSize::new(width, height)),
            (_, _, Some(image)) => read_image_size(image),
            _ => Err("input needs either `image` or both `width` and `height`".to_string()),
        }
    }

    pub fn resolve_hits(&self, size: ImageSize) -> Result<Vec<Point2<f64>>, String> {
        let sources = [
            self.hits.is_some(),
            self.hits_json.is_some(),
            self.yolo_labels.is_some(),
        ];
        if sources.iter().filter(|s| **s).count() > 1 {
            return Err(
                "input must use only one of `hits`, `hits_json`, `yolo_labels`".to_string(),
            );
        }
        if let Some(hits) = &self.hits {
            return Ok(hits.iter().map(|[x, y]| Point2::new(*x, *y)).collect());
        }
        if let Some(path) = &self.hits_json {
            return read_hits(HitSource::Json(path), size);
        }
        if let Some(path) = &self.yolo_labels {
            return read_hits(HitSource::Yolo(path), size);
        }
        // No detections recorded for this image.
        Ok(Vec::new())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReportConfig {
    pub inputs: Vec<InputConfig>,
    /// Optional replacement for the built-in scenario catalogue.
    #[serde(default)]
    pub catalogue: Option<PathBuf>,
    #[serde(default)]
    pub zone_params: ZoneParams,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn parse_config(json: &str) -> Result<ReportConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<ReportConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
