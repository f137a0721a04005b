use nalgebra::Point2;

/// Pixel position at `radius` from the image center in direction `angle_deg`
/// (counter-clockwise from +x, y up).
pub fn polar_hit(width: u32, height: u32, radius: f64, angle_deg: f64) -> Point2<f64> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let a = angle_deg.to_radians();
    Point2::new(
        f64::from(width) / 2.0 + radius * a.cos(),
        f64::from(height) / 2.0 - radius * a.sin(),
    )
}

/// `count` hits spread on a small arc around `angle_deg`.
pub fn cluster(
    width: u32,
    height: u32,
    radius: f64,
    angle_deg: f64,
    count: usize,
) -> Vec<Point2<f64>> {
    (0..count)
        .map(|i| polar_hit(width, height, radius, angle_deg + 4.0 * i as f64 - 4.0))
        .collect()
}

/// Hits jittered inside the central disc.
pub fn center_hits(width: u32, height: u32, count: usize) -> Vec<Point2<f64>> {
    (0..count)
        .map(|i| polar_hit(width, height, 5.0 + i as f64, 37.0 * i as f64))
        .collect()
}

/// YOLO prediction lines for the given pixel hits.
pub fn yolo_lines(width: u32, height: u32, hits: &[Point2<f64>]) -> String {
    hits.iter()
        .map(|p| {
            format!(
                "0 {:.6} {:.6} 0.020000 0.020000 0.91\n",
                p.x / f64::from(width),
                p.y / f64::from(height)
            )
        })
        .collect()
}
