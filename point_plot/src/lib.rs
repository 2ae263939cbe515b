//! Reading and plotting of 3D point records.
//!
//! Records are comma-separated lines of `x,y,z` (a path) or
//! `x,y,z,nx,ny,nz` (points with normals). [`plot::Figure`] describes what
//! is drawn; with the `render` feature [`render::show`] opens it in a window.

pub mod geometry;
pub mod io;
pub mod plot;
#[cfg(feature = "render")]
pub mod render;

pub use geometry::{OrientedPoint3, Point3};
pub use io::options::PlotOptions;
pub use plot::{Figure, SceneLayout, Series};
