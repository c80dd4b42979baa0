//! curvesvg compiles 2D vector curve geometry authored in a 3D content tool
//! into SVG path data.
//!
//! The pipeline walks an in-memory curve representation (a list of splines,
//! each a sequence of control points with optional tangent handles), applies
//! the owning object's world transform and the coordinate-space conversion
//! (Y-flip, scale normalization, precision rounding), and emits minimal path
//! commands, including closed-loop handling and per-curve-type sampling.
//!
//! NURBS-like splines are approximated by linear interpolation between
//! control points; see [`export::raster::NurbsRasterizer`].
//!
//! # Example
//!
//! ```
//! use curvesvg::glam::dvec3;
//! use curvesvg::scene::box_corners;
//! use curvesvg::{ControlPoint, CurveObject, ExportConfig, Spline, SplineKind, Transform};
//!
//! let square = Spline::new(
//!     SplineKind::Poly,
//!     vec![
//!         ControlPoint::anchor(dvec3(0.0, 0.0, 0.0)),
//!         ControlPoint::anchor(dvec3(10.0, 0.0, 0.0)),
//!         ControlPoint::anchor(dvec3(10.0, 20.0, 0.0)),
//!         ControlPoint::anchor(dvec3(0.0, 20.0, 0.0)),
//!     ],
//!     true,
//! );
//! let object = CurveObject {
//!     id: "square".to_string(),
//!     transform: Transform::IDENTITY,
//!     splines: vec![square],
//!     fill_color: None,
//!     bounds: box_corners(dvec3(0.0, 0.0, 0.0), dvec3(10.0, 20.0, 0.0)),
//! };
//!
//! let svg = curvesvg::export_document(&[object], &ExportConfig::default())?;
//! assert!(svg.contains(r#"<path id="square""#));
//! # Ok::<(), curvesvg::ExportError>(())
//! ```

pub mod errors;
pub mod export;
pub mod log;
pub mod scene;
pub mod types;

pub use errors::{ConfigError, ExportError};
pub use export::{
    ExportConfig, PathCommand, PathElement, SvgDocument, export_document, export_to_file,
    export_to_writer,
};
pub use scene::{
    ControlPoint, CurveObject, Point3, SceneCurve, Spline, SplineKind, Transform,
    snapshot_selection,
};
pub use types::{Extent, Rgb};

// Scene types are expressed in glam's f64 vectors and matrices.
pub use glam;
