use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Default radius of the central disc as a fraction of the shorter image side.
pub const DEFAULT_CENTER_RADIUS_FRAC: f64 = 0.20;

/// Tunables of the zone classifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneParams {
    /// Central disc radius relative to `min(width, height)`.
    pub center_radius_frac: f64,
}

impl Default for ZoneParams {
    fn default() -> Self {
        Self {
            center_radius_frac: DEFAULT_CENTER_RADIUS_FRAC,
        }
    }
}

impl ZoneParams {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.center_radius_frac.is_finite() || self.center_radius_frac < 0.0 {
            return Err(AnalysisError::InvalidParams {
                name: "center_radius_frac",
                value: self.center_radius_frac,
            });
        }
        Ok(())
    }
}
