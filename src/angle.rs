//! Angle utilities shared by the zone classifier and sector geometry.
//!
//! All angles here are in degrees, measured counter-clockwise from the +x
//! axis of the target frame (x right, y up).

/// Lower bound of the window the sector table is expressed in.
pub const SECTOR_WINDOW_START_DEG: f64 = -112.5;

/// Direction of the offset `(dx, dy)` in degrees, range (-180, 180].
#[inline]
pub fn direction_deg(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}

/// Wraps an angle into the half-open window `[start, start + 360)`.
///
/// Non-finite inputs are returned unchanged.
#[inline]
pub fn wrap_into_window(angle_deg: f64, start_deg: f64) -> f64 {
    if !angle_deg.is_finite() {
        return angle_deg;
    }
    let wrapped = start_deg + (angle_deg - start_deg).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative offsets.
    if wrapped >= start_deg + 360.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Wraps an atan2 direction into the window used by the sector table.
#[inline]
pub fn to_sector_window(angle_deg: f64) -> f64 {
    wrap_into_window(angle_deg, SECTOR_WINDOW_START_DEG)
}
