//! Basic geometry primitives for point plots.

mod extents;
mod point3;

pub use extents::{box_aspect, Extents};
pub use point3::{OrientedPoint3, Point3};

use nalgebra::Vector3;

/// Calculates the Euclidean distance between two 3D points.
pub fn distance3(a: Point3, b: Point3) -> f64 {
    (Vector3::<f64>::from(a) - Vector3::<f64>::from(b)).norm()
}

/// Keeps the points within `radius` of `reference`, preserving order.
pub fn within_radius(points: &[Point3], reference: Point3, radius: f64) -> Vec<Point3> {
    points
        .iter()
        .copied()
        .filter(|p| distance3(*p, reference) <= radius)
        .collect()
}

/// Keeps the oriented points whose position lies within `radius` of
/// `reference`, preserving order.
pub fn oriented_within_radius(
    points: &[OrientedPoint3],
    reference: Point3,
    radius: f64,
) -> Vec<OrientedPoint3> {
    points
        .iter()
        .copied()
        .filter(|p| distance3(p.point, reference) <= radius)
        .collect()
}

/// Positions of a set of oriented points.
pub fn positions(points: &[OrientedPoint3]) -> Vec<Point3> {
    points.iter().map(|p| p.point).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_345() {
        let d = distance3(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
        assert!((d - 5.0).abs() < 1e-12);
        let d = distance3(Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 1.0, -1.0));
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn radius_filter_keeps_order_and_boundary() {
        let pts = vec![
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, -2.0),
        ];
        let kept = within_radius(&pts, Point3::new(0.0, 0.0, 0.0), 2.0);
        assert_eq!(kept, vec![pts[0], pts[2], pts[3]]);
    }

    #[test]
    fn oriented_filter_uses_position_only() {
        let near = OrientedPoint3::new(Point3::new(0.5, 0.0, 0.0), Point3::new(100.0, 0.0, 0.0));
        let far = OrientedPoint3::new(Point3::new(9.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0));
        let kept = oriented_within_radius(&[near, far], Point3::new(0.0, 0.0, 0.0), 1.0);
        assert_eq!(kept, vec![near]);
    }

    #[test]
    fn tip_scales_normal() {
        let p = OrientedPoint3::new(Point3::new(1.0, 2.0, 3.0), Point3::new(0.0, 0.0, 1.0));
        assert_eq!(p.tip(0.2), Point3::new(1.0, 2.0, 3.2));
        assert_eq!(positions(&[p]), vec![Point3::new(1.0, 2.0, 3.0)]);
    }
}
