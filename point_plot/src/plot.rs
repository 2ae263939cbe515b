//! Renderer-independent description of a 3D point plot.

use log::{info, warn};

use crate::geometry::{box_aspect, positions, Extents, OrientedPoint3, Point3};

/// Default length factor applied to normals when drawing arrows.
pub const DEFAULT_QUIVER_LENGTH: f64 = 0.2;

/// The primary drawing of a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Points joined by a line in input order, with a marker at each point.
    Path(Vec<Point3>),
    /// Unconnected markers with an arrow from `p` to `p + length * n`.
    Quiver {
        points: Vec<OrientedPoint3>,
        length: f64,
    },
}

/// A single arrow drawn in addition to the primary series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub start: Point3,
    pub end: Point3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub axis_labels: [String; 3],
    pub box_aspect: Option<[f64; 3]>,
    pub series: Series,
    pub extra_arrows: Vec<Arrow>,
}

impl Figure {
    /// Line plot through `points` with the box aspect matched to their
    /// peak-to-peak extents.
    pub fn path(points: Vec<Point3>) -> Self {
        let aspect = box_aspect(&points);
        if let Some(a) = aspect {
            info!("box aspect {:.3} x {:.3} x {:.3}", a[0], a[1], a[2]);
        }
        Self {
            title: None,
            axis_labels: default_labels(),
            box_aspect: aspect,
            series: Series::Path(points),
            extra_arrows: Vec::new(),
        }
    }

    /// Scatter plot of `points` with an arrow along each normal.
    pub fn quiver(points: Vec<OrientedPoint3>, length: f64) -> Self {
        Self {
            title: None,
            axis_labels: default_labels(),
            box_aspect: None,
            series: Series::Quiver { points, length },
            extra_arrows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_labels(mut self, x: &str, y: &str, z: &str) -> Self {
        self.axis_labels = [x.to_string(), y.to_string(), z.to_string()];
        self
    }

    /// Sets the box aspect to the peak-to-peak extents of the plotted
    /// positions, or clears it.
    pub fn with_box_aspect(mut self, enabled: bool) -> Self {
        self.box_aspect = if enabled {
            box_aspect(&self.positions())
        } else {
            None
        };
        self
    }

    /// Adds a reference arrow drawn from `origin` along `direction`.
    pub fn with_arrow(mut self, origin: Point3, direction: Point3) -> Self {
        self.extra_arrows.push(Arrow {
            start: origin,
            end: origin.offset(direction, 1.0),
        });
        self
    }

    /// Positions of all plotted points, in order.
    pub fn positions(&self) -> Vec<Point3> {
        match &self.series {
            Series::Path(points) => points.clone(),
            Series::Quiver { points, .. } => positions(points),
        }
    }

    pub fn len(&self) -> usize {
        match &self.series {
            Series::Path(points) => points.len(),
            Series::Quiver { points, .. } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds of everything drawn: positions, arrow tips and extra arrows.
    pub fn extents(&self) -> Option<Extents> {
        let mut extents = Extents::from_points(&self.positions())?;
        if let Series::Quiver { points, length } = &self.series {
            for p in points {
                extents.include(p.tip(*length));
            }
        }
        for arrow in &self.extra_arrows {
            extents.include(arrow.start);
            extents.include(arrow.end);
        }
        Some(extents)
    }
}

fn default_labels() -> [String; 3] {
    ["X".to_string(), "Y".to_string(), "Z".to_string()]
}

/// Maps data coordinates into the world box a figure is drawn in.
///
/// The box has sides proportional to the figure's box aspect, scaled so the
/// longest side is 1, or is the unit cube when no aspect is set. Each axis
/// maps its data range linearly onto `[0, side]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub extents: Extents,
    pub size: [f64; 3],
}

impl SceneLayout {
    /// Layout for `figure`, or `None` when it has nothing to draw.
    pub fn new(figure: &Figure) -> Option<Self> {
        let Some(extents) = figure.extents() else {
            warn!("nothing to plot");
            return None;
        };
        let size = match figure.box_aspect {
            Some(aspect) => normalize_aspect(aspect),
            None => [1.0, 1.0, 1.0],
        };
        for (axis, range) in ["x", "y", "z"].iter().zip(extents.ptp()) {
            if range == 0.0 {
                warn!("{} range is zero; points are centered on that axis", axis);
            }
        }
        Some(Self { extents, size })
    }

    /// World position of a data point.
    pub fn to_world(&self, p: Point3) -> [f32; 3] {
        let min = self.extents.min.to_array();
        let ptp = self.extents.ptp();
        let p = p.to_array();
        let mut out = [0.0f32; 3];
        for i in 0..3 {
            out[i] = if ptp[i] > 0.0 {
                ((p[i] - min[i]) / ptp[i] * self.size[i]) as f32
            } else {
                (self.size[i] / 2.0) as f32
            };
        }
        out
    }

    pub fn box_size(&self) -> [f32; 3] {
        [self.size[0] as f32, self.size[1] as f32, self.size[2] as f32]
    }

    /// Center of the world box.
    pub fn center(&self) -> [f32; 3] {
        let s = self.box_size();
        [s[0] / 2.0, s[1] / 2.0, s[2] / 2.0]
    }
}

/// Scales `aspect` so its largest component is 1. A degenerate aspect (all
/// components zero, or any component not finite) yields the unit cube.
pub fn normalize_aspect(aspect: [f64; 3]) -> [f64; 3] {
    if aspect.iter().any(|a| !a.is_finite()) {
        return [1.0, 1.0, 1.0];
    }
    let largest = aspect.iter().cloned().fold(0.0f64, f64::max);
    if largest <= 0.0 {
        return [1.0, 1.0, 1.0];
    }
    [
        aspect[0] / largest,
        aspect[1] / largest,
        aspect[2] / largest,
    ]
}
