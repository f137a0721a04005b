//! File helpers for the command-line tool.
//!
//! - `read_image_size`: image dimensions from the file header (no decoding).
//! - `read_hits`: detector output from a YOLO prediction file or a JSON list.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::detections::{parse_hit_json, parse_yolo_predictions};
use crate::types::ImageSize;
use nalgebra::Point2;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reads the pixel dimensions of a PNG/JPEG without decoding pixel data.
pub fn read_image_size(path: &Path) -> Result<ImageSize, String> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| format!("Failed to read image header {}: {e}", path.display()))?;
    Ok(ImageSize::new(width, height))
}

/// Where detector output for one image lives.
#[derive(Clone, Copy, Debug)]
pub enum HitSource<'a> {
    /// JSON array of `[x, y]` pixel pairs.
    Json(&'a Path),
    /// YOLO text predictions normalized to the image size.
    Yolo(&'a Path),
}

pub fn read_hits(source: HitSource<'_>, size: ImageSize) -> Result<Vec<Point2<f64>>, String> {
    match source {
        HitSource::Json(path) => {
            let data = read_text(path)?;
            parse_hit_json(&data).map_err(|e| format!("{}: {e}", path.display()))
        }
        HitSource::Yolo(path) => {
            let data = read_text(path)?;
            parse_yolo_predictions(&data, size).map_err(|e| format!("{}: {e}", path.display()))
        }
    }
}

fn read_text(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
