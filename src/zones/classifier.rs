//! Image-space zone classification.
//!
//! `ZoneClassifier::classify` is the single entry point that owns the
//! radius and sector decisions. Target-space inputs are converted to image
//! space through [`ImageFrame`] and then routed through the same path.

use super::params::ZoneParams;
use super::sectors::sector_for_angle;
use super::{Hit, Zone};
use crate::angle::direction_deg;
use crate::error::AnalysisError;
use crate::types::{ImageFrame, ImageSize};
use nalgebra::{Point2, Vector2};

/// Pure, stateless classifier parameterised by [`ZoneParams`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoneClassifier {
    params: ZoneParams,
}

impl ZoneClassifier {
    pub fn new(params: ZoneParams) -> Result<Self, AnalysisError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ZoneParams {
        &self.params
    }

    /// Central disc radius in pixels for an image of `size`.
    pub fn center_radius_px(&self, size: ImageSize) -> f64 {
        size.shorter_side() * self.params.center_radius_frac
    }

    /// Zone of a single offset already expressed in the target frame.
    #[inline]
    fn zone_for_offset(offset: &Vector2<f64>, radius: f64) -> Zone {
        if offset.norm() <= radius {
            Zone::Center
        } else {
            Zone::Sector(sector_for_angle(direction_deg(offset.x, offset.y)))
        }
    }

    /// Labels each pixel-space hit; output order matches input order.
    ///
    /// Points outside the image bounds are still classified.
    pub fn classify(
        &self,
        points: &[Point2<f64>],
        size: ImageSize,
    ) -> Result<Vec<Zone>, AnalysisError> {
        let frame = ImageFrame::new(size)?;
        let radius = self.center_radius_px(size);
        Ok(points
            .iter()
            .map(|p| Self::zone_for_offset(&frame.to_target(p), radius))
            .collect())
    }

    /// Same as [`classify`](Self::classify) but keeps the positions.
    pub fn label_hits(
        &self,
        points: &[Point2<f64>],
        size: ImageSize,
    ) -> Result<Vec<Hit>, AnalysisError> {
        let zones = self.classify(points, size)?;
        Ok(points
            .iter()
            .zip(zones)
            .map(|(p, zone)| Hit {
                position: *p,
                zone,
            })
            .collect())
    }

    /// Classifies points given in target space (origin at center, y up).
    pub fn classify_target(
        &self,
        offsets: &[Vector2<f64>],
        size: ImageSize,
    ) -> Result<Vec<Zone>, AnalysisError> {
        let frame = ImageFrame::new(size)?;
        let pixels: Vec<Point2<f64>> = offsets.iter().map(|o| frame.to_image(o)).collect();
        self.classify(&pixels, size)
    }
}

/// Classifies `(x, y)` pixel pairs with the default parameters.
pub fn classify_hits(
    points: &[(f64, f64)],
    width: u32,
    height: u32,
) -> Result<Vec<Zone>, AnalysisError> {
    let points: Vec<Point2<f64>> = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    ZoneClassifier::default().classify(&points, ImageSize::new(width, height))
}

/// Classifies target-space `(x, y)` pairs (origin at center, y up) with the
/// default parameters.
pub fn classify_target_points(
    points: &[(f64, f64)],
    width: u32,
    height: u32,
) -> Result<Vec<Zone>, AnalysisError> {
    let offsets: Vec<Vector2<f64>> = points.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
    ZoneClassifier::default().classify_target(&offsets, ImageSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::Sector;

    const SIZE: ImageSize = ImageSize {
        width: 640,
        height: 480,
    };

    fn labels(zones: &[Zone]) -> Vec<&'static str> {
        zones.iter().map(|z| z.label()).collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let zones = classify_hits(&[], 640, 480).unwrap();
        assert!(zones.is_empty());
    }

    #[test]
    fn zero_dimension_is_invalid_input() {
        let err = classify_hits(&[(1.0, 1.0)], 0, 480).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidGeometry {
                width: 0,
                height: 480
            }
        );
    }

    #[test]
    fn center_radius_uses_shorter_side() {
        let clf = ZoneClassifier::default();
        assert!((clf.center_radius_px(SIZE) - 96.0).abs() < 1e-12);
        // On the radius is still center; just beyond is a sector.
        let zones = classify_hits(&[(320.0 + 96.0, 240.0), (320.0 + 96.5, 240.0)], 640, 480)
            .unwrap();
        assert_eq!(labels(&zones), ["1", "7"]);
    }

    #[test]
    fn compass_directions_map_to_expected_sectors() {
        let (cx, cy) = (320.0, 240.0);
        let d = 200.0;
        let points = [
            (cx - d, cy + d), // lower-left
            (cx - d, cy),     // left
            (cx - d, cy - d), // upper-left
            (cx, cy - d),     // top
            (cx + d, cy - d), // upper-right
            (cx + d, cy),     // right
            (cx + d, cy + d), // lower-right
            (cx, cy + d),     // bottom
        ];
        let zones = classify_hits(&points, 640, 480).unwrap();
        assert_eq!(labels(&zones), ["2", "3", "4", "5", "6", "7", "8", "9"]);
    }

    #[test]
    fn points_outside_the_image_are_classified() {
        let zones = classify_hits(&[(-5000.0, 240.0), (320.0, 10_000.0)], 640, 480).unwrap();
        assert_eq!(labels(&zones), ["3", "9"]);
    }

    #[test]
    fn nan_coordinates_fall_back_to_bottom() {
        let zones = classify_hits(&[(f64::NAN, 0.0)], 640, 480).unwrap();
        assert_eq!(zones, [Zone::Sector(Sector::Bottom)]);
    }

    #[test]
    fn target_space_variant_agrees_with_image_space() {
        let target = [(0.0, 0.0), (-150.0, -150.0), (0.0, 200.0), (220.0, -10.0)];
        let from_target = classify_target_points(&target, 640, 480).unwrap();
        let image: Vec<(f64, f64)> = target.iter().map(|&(x, y)| (x + 320.0, 240.0 - y)).collect();
        let from_image = classify_hits(&image, 640, 480).unwrap();
        assert_eq!(from_target, from_image);
        assert_eq!(labels(&from_target), ["1", "2", "5", "7"]);
    }

    #[test]
    fn label_hits_keeps_positions_in_order() {
        let clf = ZoneClassifier::default();
        let points = [Point2::new(320.0, 240.0), Point2::new(600.0, 240.0)];
        let hits = clf.label_hits(&points, SIZE).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].position, points[0]);
        assert_eq!(hits[0].zone, Zone::Center);
        assert_eq!(hits[1].zone, Zone::Sector(Sector::Right));
    }

    #[test]
    fn invalid_radius_fraction_is_rejected() {
        let params = ZoneParams {
            center_radius_frac: -0.1,
        };
        assert!(ZoneClassifier::new(params).is_err());
        let params = ZoneParams {
            center_radius_frac: f64::INFINITY,
        };
        assert!(ZoneClassifier::new(params).is_err());
    }

    #[test]
    fn zero_radius_disables_center_except_exact_hit() {
        let clf = ZoneClassifier::new(ZoneParams {
            center_radius_frac: 0.0,
        })
        .unwrap();
        let zones = clf
            .classify(&[Point2::new(320.0, 240.0), Point2::new(321.0, 240.0)], SIZE)
            .unwrap();
        assert_eq!(labels(&zones), ["1", "7"]);
    }
}
