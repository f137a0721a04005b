//! Mapping of hit coordinates onto the ten-zone target face.
//!
//! Zone `"1"` is the central disc. Zones `"2"`..`"9"` are eight 45° sectors
//! running clockwise from lower-left: 2 lower-left, 3 left, 4 upper-left,
//! 5 top, 6 upper-right, 7 right, 8 lower-right, 9 bottom.

pub mod classifier;
pub mod params;
pub mod sectors;


use nalgebra::Point2;
use serde::{Serialize, Serializer};
use std::fmt;

pub use classifier::{classify_hits, classify_target_points, ZoneClassifier};
pub use params::ZoneParams;
pub use sectors::{sector_for_angle, SectorRange, SECTOR_TABLE};

/// Label of the central disc.
pub const CENTER_LABEL: &str = "1";

/// One of the eight angular sectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sector {
    LowerLeft,
    Left,
    UpperLeft,
    Top,
    UpperRight,
    Right,
    LowerRight,
    Bottom,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::LowerLeft,
        Sector::Left,
        Sector::UpperLeft,
        Sector::Top,
        Sector::UpperRight,
        Sector::Right,
        Sector::LowerRight,
        Sector::Bottom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sector::LowerLeft => "2",
            Sector::Left => "3",
            Sector::UpperLeft => "4",
            Sector::Top => "5",
            Sector::UpperRight => "6",
            Sector::Right => "7",
            Sector::LowerRight => "8",
            Sector::Bottom => "9",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Symbolic zone assigned to a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Center,
    Sector(Sector),
}

impl Zone {
    pub fn label(self) -> &'static str {
        match self {
            Zone::Center => CENTER_LABEL,
            Zone::Sector(sector) => sector.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label == CENTER_LABEL {
            Some(Zone::Center)
        } else {
            Sector::from_label(label).map(Zone::Sector)
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A detected hit together with its assigned zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hit {
    /// Pixel position in image space (origin top-left, y down).
    pub position: Point2<f64>,
    pub zone: Zone,
}
