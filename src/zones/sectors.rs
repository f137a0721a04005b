//! Angular boundary table for the eight outer sectors.
//!
//! Ranges are closed on both ends and listed in lookup order. Where two
//! ranges share a bound the earlier entry wins, so e.g. 202.5° resolves to
//! sector 2 and 157.5° to sector 3. The table spans the window
//! [-112.5°, 247.5°]; directions are wrapped into that window before lookup,
//! which makes the table cover every finite angle.

use super::Sector;
use crate::angle::to_sector_window;
use log::warn;

/// Closed angular range `[min_deg, max_deg]` owned by one sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorRange {
    pub sector: Sector,
    pub min_deg: f64,
    pub max_deg: f64,
}

impl SectorRange {
    #[inline]
    pub fn contains(&self, angle_deg: f64) -> bool {
        self.min_deg <= angle_deg && angle_deg <= self.max_deg
    }

    /// Direction halfway between the bounds (in the table window).
    pub fn bisector_deg(&self) -> f64 {
        0.5 * (self.min_deg + self.max_deg)
    }
}

const fn range(sector: Sector, min_deg: f64, max_deg: f64) -> SectorRange {
    SectorRange {
        sector,
        min_deg,
        max_deg,
    }
}

/// Lookup order matters: first match wins.
pub const SECTOR_TABLE: [SectorRange; 8] = [
    range(Sector::LowerLeft, 202.5, 247.5),
    range(Sector::Left, 157.5, 202.5),
    range(Sector::UpperLeft, 112.5, 157.5),
    range(Sector::Top, 67.5, 112.5),
    range(Sector::UpperRight, 22.5, 67.5),
    range(Sector::Right, -22.5, 22.5),
    range(Sector::LowerRight, -67.5, -22.5),
    range(Sector::Bottom, -112.5, -67.5),
];

/// Sector returned when no range matches (only reachable for non-finite angles).
pub const FALLBACK_SECTOR: Sector = Sector::Bottom;

/// Finds the table entry for a raw direction, without the fallback.
pub fn lookup_sector(angle_deg: f64) -> Option<Sector> {
    let wrapped = to_sector_window(angle_deg);
    SECTOR_TABLE
        .iter()
        .find(|r| r.contains(wrapped))
        .map(|r| r.sector)
}

/// Resolves a direction in degrees (any finite value) to its sector.
pub fn sector_for_angle(angle_deg: f64) -> Sector {
    lookup_sector(angle_deg).unwrap_or_else(|| {
        warn!(
            "no sector range matched angle {angle_deg}; falling back to sector {}",
            FALLBACK_SECTOR.label()
        );
        FALLBACK_SECTOR
    })
}

/// Table entry describing `sector`.
pub fn sector_range(sector: Sector) -> &'static SectorRange {
    // Sector discriminants follow table order.
    &SECTOR_TABLE[sector as usize]
}
