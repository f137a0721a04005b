use crate::error::AnalysisError;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the analysed photograph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rejects degenerate geometry before any division by the image size.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.width == 0 || self.height == 0 {
            return Err(AnalysisError::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn shorter_side(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

/// Mapping between image space and the canonical target frame.
///
/// Image space: origin top-left, y grows downward.
/// Target space: origin at the image center, x right, y up.
///
/// `to_target(p) = (x - w/2, h/2 - y)` and `to_image` is its inverse. Every
/// caller holding coordinates in one convention converts through this type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageFrame {
    pub center: Point2<f64>,
}

impl ImageFrame {
    pub fn new(size: ImageSize) -> Result<Self, AnalysisError> {
        size.validate()?;
        Ok(Self {
            center: Point2::new(f64::from(size.width) / 2.0, f64::from(size.height) / 2.0),
        })
    }

    #[inline]
    pub fn to_target(&self, pixel: &Point2<f64>) -> Vector2<f64> {
        Vector2::new(pixel.x - self.center.x, self.center.y - pixel.y)
    }

    #[inline]
    pub fn to_image(&self, target: &Vector2<f64>) -> Point2<f64> {
        Point2::new(target.x + self.center.x, self.center.y - target.y)
    }
}
