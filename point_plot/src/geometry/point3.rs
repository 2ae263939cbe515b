//! Basic 3D point types used throughout the crate.

use nalgebra::Vector3;

/// Representation of a 3D point.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinates as an `[x, y, z]` array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `self + v * scale`.
    pub fn offset(self, v: Point3, scale: f64) -> Point3 {
        Point3::new(
            self.x + v.x * scale,
            self.y + v.y * scale,
            self.z + v.z * scale,
        )
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Point3> for Vector3<f64> {
    fn from(p: Point3) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

/// A point with an associated normal or direction vector.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrientedPoint3 {
    pub point: Point3,
    pub normal: Point3,
}

impl OrientedPoint3 {
    /// Creates a new oriented point.
    pub fn new(point: Point3, normal: Point3) -> Self {
        Self { point, normal }
    }

    /// End of the arrow drawn from the point along its normal.
    pub fn tip(&self, length: f64) -> Point3 {
        self.point.offset(self.normal, length)
    }
}

impl From<[f64; 6]> for OrientedPoint3 {
    fn from(v: [f64; 6]) -> Self {
        Self::new(
            Point3::new(v[0], v[1], v[2]),
            Point3::new(v[3], v[4], v[5]),
        )
    }
}
