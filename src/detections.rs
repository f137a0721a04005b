//! Adapters turning detector output into image-space hit positions.
//!
//! - `parse_yolo_predictions`: YOLO text records `class cx cy w h [conf]`
//!   with coordinates normalized to the image size; the box center is the hit.
//! - `parse_hit_json`: a JSON array of `[x, y]` pixel pairs.

use crate::error::DetectionError;
use crate::types::ImageSize;
use nalgebra::Point2;

/// One normalized bounding box as written by YOLO-style detectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedBox {
    pub class_id: u32,
    pub cx: f64,
    pub cy: f64,
    pub w: f64,
    pub h: f64,
    pub confidence: Option<f64>,
}

impl NormalizedBox {
    /// Box center in image pixels.
    pub fn center_px(&self, size: ImageSize) -> Point2<f64> {
        Point2::new(
            self.cx * f64::from(size.width),
            self.cy * f64::from(size.height),
        )
    }
}

fn parse_field<T: std::str::FromStr>(
    token: Option<&str>,
    name: &str,
    line: usize,
) -> Result<T, DetectionError> {
    let token = token.ok_or_else(|| DetectionError::MalformedLine {
        line,
        reason: format!("missing {name}"),
    })?;
    token.parse().map_err(|_| DetectionError::MalformedLine {
        line,
        reason: format!("invalid {name} {token:?}"),
    })
}

/// Parses YOLO text records; blank lines are skipped. Line numbers are 1-based.
pub fn parse_yolo_boxes(text: &str) -> Result<Vec<NormalizedBox>, DetectionError> {
    let mut boxes = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        let class_id = parse_field(tokens.next(), "class id", line)?;
        let cx: f64 = parse_field(tokens.next(), "center x", line)?;
        let cy: f64 = parse_field(tokens.next(), "center y", line)?;
        let w = parse_field(tokens.next(), "width", line)?;
        let h = parse_field(tokens.next(), "height", line)?;
        let confidence = tokens
            .next()
            .map(|t| parse_field(Some(t), "confidence", line))
            .transpose()?;
        if tokens.next().is_some() {
            return Err(DetectionError::MalformedLine {
                line,
                reason: "unexpected trailing fields".to_string(),
            });
        }
        if !cx.is_finite() || !cy.is_finite() {
            return Err(DetectionError::MalformedLine {
                line,
                reason: "non-finite box center".to_string(),
            });
        }
        boxes.push(NormalizedBox {
            class_id,
            cx,
            cy,
            w,
            h,
            confidence,
        });
    }
    Ok(boxes)
}

/// Parses YOLO predictions and scales box centers to pixel hits.
pub fn parse_yolo_predictions(
    text: &str,
    size: ImageSize,
) -> Result<Vec<Point2<f64>>, DetectionError> {
    size.validate()?;
    Ok(parse_yolo_boxes(text)?
        .iter()
        .map(|b| b.center_px(size))
        .collect())
}

/// Parses `[[x, y], ...]` pixel pairs.
pub fn parse_hit_json(json: &str) -> Result<Vec<Point2<f64>>, DetectionError> {
    let pairs: Vec<[f64; 2]> =
        serde_json::from_str(json).map_err(|e| DetectionError::InvalidJson(e.to_string()))?;
    Ok(pairs.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yolo_centers_are_scaled_to_pixels() {
        let text = "0 0.5 0.25 0.02 0.03\n\n0 0.1 0.9 0.02 0.02 0.87\n";
        let hits = parse_yolo_predictions(text, ImageSize::new(640, 480)).unwrap();
        assert_eq!(hits, vec![Point2::new(320.0, 120.0), Point2::new(64.0, 432.0)]);
    }

    #[test]
    fn optional_confidence_is_kept() {
        let boxes = parse_yolo_boxes("3 0.5 0.5 0.1 0.1 0.42").unwrap();
        assert_eq!(boxes[0].class_id, 3);
        assert_eq!(boxes[0].confidence, Some(0.42));
    }

    #[test]
    fn empty_prediction_file_means_no_hits() {
        let hits = parse_yolo_predictions("", ImageSize::new(10, 10)).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn malformed_lines_report_their_number() {
        let err = parse_yolo_boxes("0 0.5 0.5 0.1 0.1\n0 0.5 oops 0.1 0.1").unwrap_err();
        assert_eq!(
            err,
            DetectionError::MalformedLine {
                line: 2,
                reason: "invalid center y \"oops\"".to_string(),
            }
        );
        assert!(matches!(
            parse_yolo_boxes("0 0.5 0.5"),
            Err(DetectionError::MalformedLine { line: 1, .. })
        ));
        assert!(parse_yolo_boxes("0 0.5 0.5 0.1 0.1 0.9 7").is_err());
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        assert!(matches!(
            parse_yolo_predictions("0 0.5 0.5 0.1 0.1", ImageSize::new(0, 10)),
            Err(DetectionError::Geometry(_))
        ));
    }

    #[test]
    fn json_hit_pairs_are_parsed() {
        let hits = parse_hit_json("[[1.5, 2.0], [300, 400]]").unwrap();
        assert_eq!(hits, vec![Point2::new(1.5, 2.0), Point2::new(300.0, 400.0)]);
        assert!(matches!(
            parse_hit_json("[[1.0]]"),
            Err(DetectionError::InvalidJson(_))
        ));
    }
}
