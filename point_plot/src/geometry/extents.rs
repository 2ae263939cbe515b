//! Axis-aligned bounds of a point collection.

use super::Point3;

fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn corner(a: Point3, b: Point3, f: fn(f64, f64) -> f64) -> Point3 {
    Point3::new(f(a.x, b.x), f(a.y, b.y), f(a.z, b.z))
}

/// Minimum and maximum corner of a set of points.
///
/// A NaN coordinate makes the bound of its axis NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub min: Point3,
    pub max: Point3,
}

impl Extents {
    /// Computes the bounds of `points`. Returns `None` when `points` is empty.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let first = *points.first()?;
        Some(points[1..].iter().fold(
            Self {
                min: first,
                max: first,
            },
            |acc, p| Self {
                min: corner(acc.min, *p, min_nan),
                max: corner(acc.max, *p, max_nan),
            },
        ))
    }

    /// Peak-to-peak range along each axis.
    pub fn ptp(&self) -> [f64; 3] {
        [
            self.max.x - self.min.x,
            self.max.y - self.min.y,
            self.max.z - self.min.z,
        ]
    }

    /// Grows the bounds to include `p`.
    pub fn include(&mut self, p: Point3) {
        self.min = corner(self.min, p, min_nan);
        self.max = corner(self.max, p, max_nan);
    }
}

/// Box aspect matching the peak-to-peak extents of `points` on each axis.
pub fn box_aspect(points: &[Point3]) -> Option<[f64; 3]> {
    Extents::from_points(points).map(|e| e.ptp())
}
